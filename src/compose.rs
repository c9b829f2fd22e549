//! Post-processing, canonical composition, and UTF-8 re-encoding:
//! the second half of the pipeline.

use crate::codec;
use crate::error::{Error, Result};
use crate::options::{Config, NlfTarget};
use crate::property::{self, BoundClass, Category};

/// Post-process and, if `COMPOSE` is set, canonically recompose a
/// decomposed/reordered codepoint sequence, then re-encode it as
/// UTF-8. `cfg` must already reflect `STABLE`/`COMPOSE`/`NLF2x`/
/// `STRIPCC` exactly as the caller wants them applied.
///
/// The returned buffer carries a trailing `0x00` that is not part of
/// the normalized text itself (mirroring the zero-terminated buffer a
/// C caller of this pipeline would receive); the text proper is
/// `&out[..out.len() - 1]`.
pub fn reencode(cps: &[u32], cfg: &Config) -> Result<Vec<u8>> {
    let mut buf = post_process(cps, cfg);
    if cfg.compose {
        compose_buf(&mut buf, cfg);
    }
    let mut out = Vec::with_capacity(buf.len() * 2 + 1);
    for &cp in &buf {
        let bytes = codec::encode(cp);
        if bytes.is_empty() {
            return Err(Error::Overflow);
        }
        out.extend_from_slice(&bytes);
    }
    out.push(0);
    Ok(out)
}

fn nlf_target(nlf: NlfTarget) -> Option<u32> {
    match nlf {
        NlfTarget::None => None,
        NlfTarget::LineSeparator => Some(0x2028),
        NlfTarget::ParagraphSeparator => Some(0x2029),
        NlfTarget::Lf => Some(0x000A),
    }
}

/// `true` if `cp` should be rewritten by the `NLF2x` policy. CR, LF,
/// NEL, LS, and PS always count; HT and FF only count when some
/// `NLF2x` bit is set (otherwise they're ordinary control characters,
/// left to the plain `STRIPCC` control-character rule).
fn is_newline_function(cp: u32, nlf: NlfTarget) -> bool {
    matches!(cp, 0x000A | 0x000D | 0x0085 | 0x2028 | 0x2029)
        || (nlf != NlfTarget::None && matches!(cp, 0x0009 | 0x000C))
}

/// Rewrite newline functions per the `NLF2x` policy (collapsing CRLF
/// to a single target codepoint) and, under `STRIPCC`, replace any
/// other control character with U+0020 (see `DESIGN.md`'s resolution
/// of this option combination). `CHARBOUND` boundary markers pass
/// through untouched.
fn post_process(cps: &[u32], cfg: &Config) -> Vec<u32> {
    let mut out = Vec::with_capacity(cps.len());
    let mut i = 0;
    while i < cps.len() {
        let cp = cps[i];

        if cp == codec::BOUNDARY_MARKER {
            out.push(cp);
            i += 1;
            continue;
        }

        if cp == 0x000D && cps.get(i + 1) == Some(&0x000A) {
            match nlf_target(cfg.nlf) {
                Some(target) => out.push(target),
                None if cfg.stripcc => out.push(0x0020),
                None => {
                    out.push(0x000D);
                    out.push(0x000A);
                }
            }
            i += 2;
            continue;
        }

        if is_newline_function(cp, cfg.nlf) {
            match nlf_target(cfg.nlf) {
                Some(target) => out.push(target),
                None if cfg.stripcc => out.push(0x0020),
                None => out.push(cp),
            }
            i += 1;
            continue;
        }

        if cfg.stripcc {
            let rec = property::property_of(cp);
            if rec.category == Category::Cc || rec.boundclass == BoundClass::Control {
                out.push(0x0020);
                i += 1;
                continue;
            }
        }

        out.push(cp);
        i += 1;
    }
    out
}

/// Canonical composition: for every starter,
/// attempt to absorb each following combining-class-ordered character
/// in turn, stopping at the first one that is blocked. Hangul `L+V`
/// and `LV+T` compose algorithmically; everything else goes through
/// [`property::compose_pair`].
fn compose_buf(buf: &mut Vec<u32>, cfg: &Config) {
    let mut pos = 0;
    while pos < buf.len() {
        if property::property_of(buf[pos]).combining_class != 0 {
            pos += 1;
            continue;
        }
        // Tracks the highest combining class seen so far among
        // non-composed characters since `pos`.
        let mut max_class: u8 = 0;
        let mut i = pos + 1;
        while i < buf.len() {
            let ccc = property::property_of(buf[i]).combining_class;
            if ccc == 0 {
                break; // reached the next starter without composing
            }
            if ccc <= max_class {
                max_class = ccc;
                i += 1;
                continue; // blocked by an intervening character of equal or higher class
            }
            if let Some(composed) = try_compose_pair(buf[pos], buf[i], cfg) {
                buf[pos] = composed;
                buf.remove(i);
                continue;
            }
            max_class = ccc;
            i += 1;
        }
        pos += 1;
    }
}

fn try_compose_pair(first: u32, second: u32, cfg: &Config) -> Option<u32> {
    if let Some(lv) = property::hangul_compose_lv(first, second) {
        return Some(lv);
    }
    if let Some(lvt) = property::hangul_compose_lvt(first, second) {
        return Some(lvt);
    }
    let r1 = property::property_of(first);
    let r2 = property::property_of(second);
    let composite = property::compose_pair(r1.comb1st_index, r2.comb2nd_index)?;
    if cfg.stable && property::property_of(composite).comp_exclusion {
        return None;
    }
    Some(composite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Config, Options};

    fn cfg(opts: Options) -> Config {
        Config::from_options(opts).unwrap()
    }

    /// Strips the trailing zero terminator `reencode` appends and
    /// interprets the rest as UTF-8.
    fn utf8(bytes: &[u8]) -> String {
        assert_eq!(bytes.last(), Some(&0), "reencode output must be zero-terminated");
        String::from_utf8(bytes[..bytes.len() - 1].to_vec()).unwrap()
    }

    #[test]
    fn composes_a_and_diaeresis_into_a_umlaut() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::COMPOSE);
        let out = reencode(&[0x0041, 0x0308], &c).unwrap();
        assert_eq!(utf8(&out), "Ä");
    }

    #[test]
    fn composes_hangul_jamo_into_syllable() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::COMPOSE);
        let out = reencode(&[0x1100, 0x1161], &c).unwrap();
        assert_eq!(utf8(&out), "가");
    }

    #[test]
    fn crlf_collapses_to_lf_under_nlf2lf_and_stripcc() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::NLF2LF | Options::STRIPCC);
        let out = reencode(&[0x000D, 0x000A], &c).unwrap();
        assert_eq!(utf8(&out), "\n");
    }

    #[test]
    fn compose_blocked_by_intervening_equal_class_leaves_first_pair_intact() {
        // A, 0301, 0308: 0301 composes with A first (Á), leaving 0308 loose.
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::COMPOSE);
        let out = reencode(&[0x0041, 0x0301, 0x0308], &c).unwrap();
        assert_eq!(utf8(&out), "\u{00C1}\u{0308}");
    }

    #[test]
    fn compose_second_ordering_takes_the_other_pair() {
        // A, 0308, 0301: 0308 composes with A first (Ä), leaving 0301 loose.
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::COMPOSE);
        let out = reencode(&[0x0041, 0x0308, 0x0301], &c).unwrap();
        assert_eq!(utf8(&out), "\u{00C4}\u{0301}");
    }

    #[test]
    fn stripcc_without_nlf_maps_other_controls_to_space() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::STRIPCC);
        let out = reencode(&[0x0041, 0x0009, 0x0042], &c).unwrap();
        assert_eq!(utf8(&out), "A B");
    }

    #[test]
    fn tab_and_form_feed_convert_to_lf_under_nlf2lf() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::NLF2LF);
        let out = reencode(&[0x0009, 0x000C], &c).unwrap();
        assert_eq!(utf8(&out), "\n\n");
    }

    #[test]
    fn output_carries_a_trailing_zero_terminator() {
        let c = cfg(Options::NULLTERM | Options::STABLE);
        let out = reencode(&[0x0041], &c).unwrap();
        assert_eq!(out, vec![0x41, 0x00]);
    }
}
