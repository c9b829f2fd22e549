//! The public option bitmask and its validated, resolved form.

use crate::error::{Error, Result};
use bitflags::bitflags;

bitflags! {
    /// Option flags controlling the normalization pipeline.
    ///
    /// The numeric values form a fixed ABI-facing binary layout and
    /// must not be renumbered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Options: u32 {
        /// Input length is implicit: read until the first zero byte.
        const NULLTERM  = 1 << 0;
        /// Skip compositions that would violate Unicode versioning stability.
        const STABLE    = 1 << 1;
        /// Use compatibility decomposition instead of canonical-only.
        const COMPAT    = 1 << 2;
        /// After reordering, attempt recomposition.
        const COMPOSE   = 1 << 3;
        /// Leave the result fully decomposed.
        const DECOMPOSE = 1 << 4;
        /// Drop ignorable codepoints and U+00AD.
        const IGNORE    = 1 << 5;
        /// Fail if any input codepoint is unassigned (category Cn).
        const REJECTNA  = 1 << 6;
        /// Map newline functions to U+2028 (LINE SEPARATOR).
        const NLF2LS    = 1 << 7;
        /// Map newline functions to U+2029 (PARAGRAPH SEPARATOR).
        const NLF2PS    = 1 << 8;
        /// Remove or convert control characters per the NLF policy.
        const STRIPCC   = 1 << 9;
        /// Apply casefold_mapping during decomposition.
        const CASEFOLD  = 1 << 10;
        /// Insert the grapheme-boundary marker 0xFFFF before each boundary.
        const CHARBOUND = 1 << 11;
        /// Replace selected codepoints with ASCII equivalents.
        const LUMP      = 1 << 12;
        /// Drop codepoints whose category is Mn/Mc/Me.
        const STRIPMARK = 1 << 13;
    }
}

impl Options {
    /// Both NLF bits set means "map newline functions to LF".
    pub const NLF2LF: Options = Options::NLF2LS.union(Options::NLF2PS);
}

/// How a newline-function sequence (CR, LF, CRLF, NEL, and HT/FF under
/// `STRIPCC`) should be rewritten by the post-processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NlfTarget {
    /// No NLF bit set: leave newline functions alone except for the
    /// ordinary `STRIPCC` control-character rule.
    None,
    /// `NLF2LS`: rewrite to U+2028 LINE SEPARATOR.
    LineSeparator,
    /// `NLF2PS`: rewrite to U+2029 PARAGRAPH SEPARATOR.
    ParagraphSeparator,
    /// `NLF2LS | NLF2PS`: rewrite to U+000A LINE FEED.
    Lf,
}

/// A validated, resolved configuration, lifted once from an `Options`
/// bitmask so the rest of the pipeline can match on a closed set of
/// choices instead of re-testing bits at every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub nullterm: bool,
    pub stable: bool,
    pub compat: bool,
    pub compose: bool,
    pub decompose: bool,
    pub ignore: bool,
    pub rejectna: bool,
    pub nlf: NlfTarget,
    pub stripcc: bool,
    pub casefold: bool,
    pub charbound: bool,
    pub lump: bool,
    pub stripmark: bool,
}

impl Config {
    /// Lift an `Options` bitmask into a validated `Config`, or report
    /// `InvalidOpts` for combinations that are inherently inconsistent:
    /// `STRIPMARK` without `COMPOSE`/`DECOMPOSE`, or `COMPOSE` and
    /// `DECOMPOSE` set simultaneously.
    pub fn from_options(opts: Options) -> Result<Config> {
        let compose = opts.contains(Options::COMPOSE);
        let decompose = opts.contains(Options::DECOMPOSE);
        let stripmark = opts.contains(Options::STRIPMARK);

        if compose && decompose {
            return Err(Error::InvalidOpts);
        }
        if stripmark && !(compose || decompose) {
            return Err(Error::InvalidOpts);
        }

        let nlf = match (
            opts.contains(Options::NLF2LS),
            opts.contains(Options::NLF2PS),
        ) {
            (true, true) => NlfTarget::Lf,
            (true, false) => NlfTarget::LineSeparator,
            (false, true) => NlfTarget::ParagraphSeparator,
            (false, false) => NlfTarget::None,
        };

        Ok(Config {
            nullterm: opts.contains(Options::NULLTERM),
            stable: opts.contains(Options::STABLE),
            compat: opts.contains(Options::COMPAT),
            compose,
            decompose,
            ignore: opts.contains(Options::IGNORE),
            rejectna: opts.contains(Options::REJECTNA),
            nlf,
            stripcc: opts.contains(Options::STRIPCC),
            casefold: opts.contains(Options::CASEFOLD),
            charbound: opts.contains(Options::CHARBOUND),
            lump: opts.contains(Options::LUMP),
            stripmark,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_layout_is_stable_and_numbered_in_declaration_order() {
        assert_eq!(Options::NULLTERM.bits(), 1 << 0);
        assert_eq!(Options::STABLE.bits(), 1 << 1);
        assert_eq!(Options::COMPAT.bits(), 1 << 2);
        assert_eq!(Options::COMPOSE.bits(), 1 << 3);
        assert_eq!(Options::DECOMPOSE.bits(), 1 << 4);
        assert_eq!(Options::IGNORE.bits(), 1 << 5);
        assert_eq!(Options::REJECTNA.bits(), 1 << 6);
        assert_eq!(Options::NLF2LS.bits(), 1 << 7);
        assert_eq!(Options::NLF2PS.bits(), 1 << 8);
        assert_eq!(Options::STRIPCC.bits(), 1 << 9);
        assert_eq!(Options::CASEFOLD.bits(), 1 << 10);
        assert_eq!(Options::CHARBOUND.bits(), 1 << 11);
        assert_eq!(Options::LUMP.bits(), 1 << 12);
        assert_eq!(Options::STRIPMARK.bits(), 1 << 13);
    }

    #[test]
    fn compose_and_decompose_conflict() {
        let opts = Options::COMPOSE | Options::DECOMPOSE;
        assert_eq!(Config::from_options(opts), Err(Error::InvalidOpts));
    }

    #[test]
    fn stripmark_requires_compose_or_decompose() {
        let opts = Options::STRIPMARK;
        assert_eq!(Config::from_options(opts), Err(Error::InvalidOpts));

        let opts = Options::STRIPMARK | Options::DECOMPOSE;
        assert!(Config::from_options(opts).is_ok());
    }

    #[test]
    fn both_nlf_bits_mean_lf() {
        let cfg = Config::from_options(Options::NLF2LF).unwrap();
        assert_eq!(cfg.nlf, NlfTarget::Lf);
    }

    #[test]
    fn nfc_preset_resolves() {
        let opts = Options::NULLTERM | Options::STABLE | Options::COMPOSE;
        let cfg = Config::from_options(opts).unwrap();
        assert!(cfg.compose && !cfg.decompose && cfg.stable && cfg.nullterm);
    }
}
