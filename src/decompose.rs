//! Decomposition and canonical reordering: the first
//! half of the pipeline, turning validated codepoints into a fully
//! decomposed, canonically ordered intermediate buffer.

use crate::codec::BOUNDARY_MARKER;
use crate::error::{Error, Result};
use crate::grapheme::grapheme_break;
use crate::options::Config;
use crate::property::{self, BoundClass, Category, DecompType};

/// Decompose and canonically reorder an entire codepoint sequence.
/// This is always run, even for the `COMPOSE` preset: canonical
/// composition works by fully decomposing first and then recomposing,
/// so `DECOMPOSE` only controls whether the caller keeps this
/// intermediate result or [`crate::compose::reencode`] composes it
/// back down.
pub fn decompose(cps: &[u32], cfg: &Config) -> Result<Vec<u32>> {
    let mut out = Vec::with_capacity(cps.len());
    let mut last_boundclass: Option<BoundClass> = None;
    for &cp in cps {
        decompose_char(cp, &mut out, cfg, &mut last_boundclass)?;
    }
    canonical_reorder(&mut out);
    Ok(out)
}

/// Run the per-codepoint decomposition pipeline, appending zero or more
/// codepoints to `dst`. Recurses for every codepoint a mapping
/// produces, so each one independently re-runs the full pipeline
/// (including its own `CHARBOUND` check against `last_boundclass`).
fn decompose_char(
    cp: u32,
    dst: &mut Vec<u32>,
    cfg: &Config,
    last_boundclass: &mut Option<BoundClass>,
) -> Result<()> {
    let rec = property::property_of(cp);

    // 1. REJECTNA
    if cfg.rejectna && rec.category == Category::Cn {
        return Err(Error::NotAssigned);
    }
    // 2. IGNORE: drop ignorable codepoints and U+00AD
    if cfg.ignore && (rec.ignorable || cp == 0x00AD) {
        return Ok(());
    }
    // 3. STRIPMARK: drop Mn/Mc/Me
    if cfg.stripmark && rec.category.is_mark() {
        return Ok(());
    }
    // 4. CASEFOLD, if a mapping exists
    if cfg.casefold {
        if let Some(mapping) = rec.casefold_mapping {
            for &m in mapping {
                decompose_char(m, dst, cfg, last_boundclass)?;
            }
            return Ok(());
        }
    }
    // 5. Hangul algorithmic decomposition, only if options request decomposition
    if cfg.compose || cfg.decompose {
        if let Some((l, v, t)) = property::hangul_decompose(cp) {
            decompose_char(l, dst, cfg, last_boundclass)?;
            decompose_char(v, dst, cfg, last_boundclass)?;
            if let Some(t) = t {
                decompose_char(t, dst, cfg, last_boundclass)?;
            }
            return Ok(());
        }
        // 6. decomp_mapping, gated on COMPAT or a canonical tag
        if let Some(mapping) = rec.decomp_mapping {
            if cfg.compat || rec.decomp_type == DecompType::Canonical {
                for &m in mapping {
                    decompose_char(m, dst, cfg, last_boundclass)?;
                }
                return Ok(());
            }
        }
    }
    // 7. LUMP
    if cfg.lump {
        if let Some(mapped) = property::lump(cp, cfg.nlf == crate::options::NlfTarget::Lf) {
            dst.push(mapped);
            return Ok(());
        }
    }
    // 8. CHARBOUND: insert a boundary marker if this is a grapheme break
    // (never before the very first codepoint of the sequence)
    if cfg.charbound {
        if let Some(prev) = *last_boundclass {
            if grapheme_break(prev, rec.boundclass) {
                dst.push(BOUNDARY_MARKER);
            }
        }
    }
    *last_boundclass = Some(rec.boundclass);

    // 9. emit the codepoint itself
    dst.push(cp);
    Ok(())
}

/// Stable-sort every maximal run of non-starters (combining_class != 0)
/// by combining class. Starters (class 0) are never moved
/// and always terminate a run.
fn canonical_reorder(buf: &mut [u32]) {
    let mut i = 0;
    while i < buf.len() {
        if property::property_of(buf[i]).combining_class == 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < buf.len() && property::property_of(buf[i]).combining_class != 0 {
            i += 1;
        }
        buf[start..i].sort_by_key(|&cp| property::property_of(cp).combining_class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Config, Options};

    fn cfg(opts: Options) -> Config {
        Config::from_options(opts).unwrap()
    }

    #[test]
    fn decomposes_precomposed_a_with_diaeresis() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::DECOMPOSE);
        let out = decompose(&[0x00C4], &c).unwrap();
        assert_eq!(out, vec![0x0041, 0x0308]);
    }

    #[test]
    fn decomposes_fi_ligature_under_compat() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::DECOMPOSE | Options::COMPAT);
        let out = decompose(&[0xFB01], &c).unwrap();
        assert_eq!(out, vec![0x0066, 0x0069]);
    }

    #[test]
    fn leaves_fi_ligature_alone_under_canonical_only() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::DECOMPOSE);
        let out = decompose(&[0xFB01], &c).unwrap();
        assert_eq!(out, vec![0xFB01]);
    }

    #[test]
    fn decomposes_hangul_syllable_to_jamo() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::DECOMPOSE);
        let out = decompose(&[0xAC00], &c).unwrap();
        assert_eq!(out, vec![0x1100, 0x1161]);
    }

    #[test]
    fn reorder_is_stable_across_equal_classes() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::DECOMPOSE);
        let a = decompose(&[0x0041, 0x0301, 0x0308], &c).unwrap();
        let b = decompose(&[0x0041, 0x0308, 0x0301], &c).unwrap();
        assert_eq!(a, vec![0x0041, 0x0301, 0x0308]);
        assert_eq!(b, vec![0x0041, 0x0308, 0x0301]);
        assert_ne!(a, b);
    }

    #[test]
    fn rejectna_errors_on_unassigned() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::DECOMPOSE | Options::REJECTNA);
        assert_eq!(decompose(&[0x0378], &c), Err(Error::NotAssigned));
    }

    #[test]
    fn ignore_drops_soft_hyphen() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::DECOMPOSE | Options::IGNORE);
        let out = decompose(&[0x0041, 0x00AD, 0x0061], &c).unwrap();
        assert_eq!(out, vec![0x0041, 0x0061]);
    }

    #[test]
    fn stripmark_drops_combining_marks() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::DECOMPOSE | Options::STRIPMARK);
        let out = decompose(&[0x0041, 0x0308], &c).unwrap();
        assert_eq!(out, vec![0x0041]);
    }

    #[test]
    fn casefold_only_leaves_precomposed_characters_alone() {
        let c = cfg(Options::NULLTERM | Options::STABLE | Options::CASEFOLD);
        let out = decompose(&[0x00C4], &c).unwrap();
        assert_eq!(out, vec![0x00C4]);
    }

    #[test]
    fn hangul_syllable_survives_without_compose_or_decompose() {
        let c = cfg(Options::NULLTERM | Options::STABLE);
        let out = decompose(&[0xAC00], &c).unwrap();
        assert_eq!(out, vec![0xAC00]);
    }
}
