//! UTF-8 decoding/validation and Unicode normalization.
//!
//! This crate turns a UTF-8 byte sequence into a canonical or
//! compatibility-normalized UTF-8 byte sequence, optionally folding
//! case, stripping ignorable/control characters, lumping
//! visually-similar characters, normalizing line terminators, and
//! inserting grapheme-cluster boundary markers.
//!
//! The pipeline has five stages, wired together by [`normalize`]:
//!
//! 1. [`property`] — a pure codepoint → property-record oracle.
//! 2. [`codec`] — UTF-8 decode/encode.
//! 3. [`decompose`] — per-codepoint decomposition and canonical reordering.
//! 4. [`compose`] — canonical/Hangul composition, post-processing, re-encoding.
//! 5. [`grapheme`]/[`case`] — convenience layers built on the same property data.
//!
//! Every returned buffer carries a trailing `0x00` that is not part of
//! the normalized text (see [`compose::reencode`]); strip the last
//! byte, or feed the buffer straight back into another call with
//! `NULLTERM` set, as shown below.
//!
//! ```
//! use utf8norm::{nfc, nfd};
//!
//! let decomposed = nfd("Ä".as_bytes()).unwrap();
//! assert_eq!(&decomposed[..decomposed.len() - 1], "A\u{0308}".as_bytes());
//! assert_eq!(&nfc(&decomposed).unwrap()[..2], "Ä".as_bytes());
//! ```

pub mod case;
pub mod codec;
pub mod compose;
pub mod decompose;
pub mod error;
pub mod grapheme;
pub mod options;
pub mod property;
mod tables;

pub use error::{errmsg, Error, Result};
pub use options::{Config, NlfTarget, Options};
pub use property::{BoundClass, Category, DecompType, PropertyRecord};

/// The top-level driver: decode `bytes` as UTF-8, decompose
/// and canonically reorder every codepoint under `opts`, optionally
/// recompose, then re-encode. This is what [`map`] and the `NFx`
/// convenience wrappers call after resolving their fixed option sets.
///
/// If `Options::NULLTERM` is set, `bytes` is read only up to (and
/// excluding) its first zero byte; otherwise the whole slice is
/// consumed.
pub fn normalize(bytes: &[u8], opts: Options) -> Result<Vec<u8>> {
    let cfg = Config::from_options(opts)?;
    let cps = codec::decode_all(bytes, cfg.nullterm)?;
    let decomposed = decompose::decompose(&cps, &cfg)?;
    compose::reencode(&decomposed, &cfg)
}

/// `map(bytes, opts)`: the general owning entry point. A C ABI
/// typically needs a two-pass query-then-fill allocation strategy to
/// size the output buffer in advance; in Rust, `Vec` already grows the
/// owned result in a single pass, so `normalize` and `map` coincide.
/// Kept as a distinct name because callers reach for `map` to mirror
/// the C API shape this crate's contract is modeled on.
pub fn map(bytes: &[u8], opts: Options) -> Result<Vec<u8>> {
    normalize(bytes, opts)
}

const NFD_OPTS: Options = Options::NULLTERM
    .union(Options::STABLE)
    .union(Options::DECOMPOSE);
const NFC_OPTS: Options = Options::NULLTERM
    .union(Options::STABLE)
    .union(Options::COMPOSE);
const NFKD_OPTS: Options = Options::NULLTERM
    .union(Options::STABLE)
    .union(Options::DECOMPOSE)
    .union(Options::COMPAT);
const NFKC_OPTS: Options = Options::NULLTERM
    .union(Options::STABLE)
    .union(Options::COMPOSE)
    .union(Options::COMPAT);

/// Canonical decomposition: `{NULLTERM, STABLE, DECOMPOSE}`.
pub fn nfd(bytes: &[u8]) -> Result<Vec<u8>> {
    normalize(bytes, NFD_OPTS)
}

/// Canonical composition: `{NULLTERM, STABLE, COMPOSE}`.
pub fn nfc(bytes: &[u8]) -> Result<Vec<u8>> {
    normalize(bytes, NFC_OPTS)
}

/// Compatibility decomposition:
/// `{NULLTERM, STABLE, DECOMPOSE, COMPAT}`.
pub fn nfkd(bytes: &[u8]) -> Result<Vec<u8>> {
    normalize(bytes, NFKD_OPTS)
}

/// Compatibility composition:
/// `{NULLTERM, STABLE, COMPOSE, COMPAT}`.
pub fn nfkc(bytes: &[u8]) -> Result<Vec<u8>> {
    normalize(bytes, NFKC_OPTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strips the trailing zero terminator and interprets the rest as UTF-8.
    fn s(bytes: &[u8]) -> &str {
        std::str::from_utf8(&bytes[..bytes.len() - 1]).unwrap()
    }

    #[test]
    fn nfc_of_a_plus_combining_diaeresis_is_a_with_diaeresis() {
        let out = nfc(&[0x41, 0xCC, 0x88]).unwrap();
        assert_eq!(out, vec![0xC3, 0x84, 0x00]);
    }

    #[test]
    fn nfd_of_a_with_diaeresis_is_a_plus_combining_diaeresis() {
        let out = nfd(&[0xC3, 0x84]).unwrap();
        assert_eq!(out, vec![0x41, 0xCC, 0x88, 0x00]);
    }

    #[test]
    fn nfkc_of_fi_ligature_is_f_i() {
        let out = nfkc(&[0xEF, 0xAC, 0x81]).unwrap();
        assert_eq!(out, b"fi\0");
    }

    #[test]
    fn nfc_of_hangul_jamo_is_precomposed_syllable() {
        let jamo: &[u8] = &[0xE1, 0x84, 0x80, 0xE1, 0x85, 0xA1];
        let out = nfc(jamo).unwrap();
        assert_eq!(out, vec![0xEA, 0xB0, 0x80, 0x00]);
    }

    #[test]
    fn crlf_with_nlf2lf_and_stripcc_becomes_lf() {
        let opts = Options::NULLTERM | Options::STABLE | Options::NLF2LF | Options::STRIPCC;
        let out = map(b"\r\n", opts).unwrap();
        assert_eq!(out, b"\n\0");
    }

    // Reorder stability keeps distinct inputs of equal combining class
    // distinct after NFD, but NFC composes them differently depending on
    // which mark is adjacent.
    #[test]
    fn reorder_stability_distinguishes_mark_order_under_nfd_and_nfc() {
        let first = [0x41, 0xCC, 0x81, 0xCC, 0x88]; // A, acute, diaeresis
        let second = [0x41, 0xCC, 0x88, 0xCC, 0x81]; // A, diaeresis, acute

        let d1 = nfd(&first).unwrap();
        let d2 = nfd(&second).unwrap();
        assert_eq!(&d1[..d1.len() - 1], first);
        assert_eq!(&d2[..d2.len() - 1], second);
        assert_ne!(d1, d2);

        assert_eq!(s(&nfc(&first).unwrap()), "\u{00C1}\u{0308}");
        assert_eq!(s(&nfc(&second).unwrap()), "\u{00C4}\u{0301}");
    }

    #[test]
    fn nfc_is_idempotent() {
        let input = "Ä".as_bytes();
        let once = nfc(input).unwrap();
        let twice = nfc(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn nfd_is_idempotent() {
        let input = "A\u{0308}".as_bytes();
        let once = nfd(input).unwrap();
        let twice = nfd(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn nfc_of_nfd_round_trips() {
        let input = "Ä".as_bytes();
        assert_eq!(nfc(&nfd(input).unwrap()).unwrap(), nfc(input).unwrap());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert_eq!(map(&[0xC0, 0x80], Options::STABLE), Err(Error::InvalidUtf8));
    }

    #[test]
    fn nullterm_stops_at_first_zero_byte() {
        let out = nfc(b"ab\0cd").unwrap();
        assert_eq!(out, b"ab\0");
    }

    #[test]
    fn charbound_marks_grapheme_boundaries_with_ff_bytes() {
        let opts = Options::STABLE | Options::CHARBOUND;
        // 'A' then a combining diaeresis then 'B': no boundary before A
        // (it's the first codepoint), none before the diaeresis
        // (Extend never breaks before), one before B.
        let out = map(&[0x41, 0xCC, 0x88, 0x42], opts).unwrap();
        assert_eq!(out, vec![0x41, 0xCC, 0x88, 0xFF, 0x42, 0x00]);
    }

    #[test]
    fn output_is_always_zero_terminated_regardless_of_nullterm() {
        let out = nfc(b"A").unwrap();
        assert_eq!(out.last(), Some(&0));
    }
}
