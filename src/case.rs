//! Default, non-tailored case mapping and case folding.
//!
//! A couple of documented special cases aren't handled here, because
//! they depend on locale (SpecialCasing.txt):
//! 1. Lithuanian keeps the dot on small i with an accent, re-adding
//!    U+0307 COMBINING DOT ABOVE.
//! 2. Turkish lowercases U+0049 'I' to U+0131 (dotless i).

use crate::decompose::decompose;
use crate::options::{Config, Options};
use crate::property::{self, cased, case_ignorable};
use std::cmp::Ordering;

fn nfd_cfg() -> Config {
    Config::from_options(Options::NULLTERM | Options::STABLE | Options::DECOMPOSE).unwrap()
}

/// Default lowercase mapping, with the
/// two context-sensitive exceptions every Unicode-conformant
/// lowercaser must special-case regardless of locale: U+0130 (which
/// has no single-codepoint simple mapping) and U+03A3 GREEK CAPITAL
/// LETTER SIGMA's final-sigma rule.
pub fn to_lowercase(code_points: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(code_points.len());
    for (pos, &cp) in code_points.iter().enumerate() {
        match cp {
            0x0130 => out.extend([0x0069, 0x0307]),
            0x03A3 => out.push(if is_final_sigma(code_points, pos) {
                0x03C2
            } else {
                0x03C3
            }),
            _ => out.push(property::property_of(cp).lowercase_mapping.unwrap_or(cp)),
        }
    }
    out
}

/// 03A3 GREEK CAPITAL LETTER SIGMA lowercases differently at the end
/// of a word (Table 3-17 of the Unicode Standard):
/// > C is preceded by a sequence consisting of a cased letter and then
/// > zero or more case-ignorable characters, and C is not followed by
/// > a sequence consisting of zero or more case-ignorable characters
/// > and then a cased letter.
fn is_final_sigma(code_points: &[u32], sigma_pos: usize) -> bool {
    let prev_cased = code_points[..sigma_pos]
        .iter()
        .rev()
        .find(|&&cp| !case_ignorable(cp))
        .is_some_and(|&cp| cased(cp));

    prev_cased && {
        let next_cased = code_points[sigma_pos + 1..]
            .iter()
            .find(|&&cp| !case_ignorable(cp))
            .is_some_and(|&cp| cased(cp));
        !next_cased
    }
}

/// Default uppercase mapping. The property record carries one simple
/// codepoint per case, so multi-codepoint special uppercasings such as
/// ß → SS are out of scope here.
pub fn to_uppercase(code_points: &[u32]) -> Vec<u32> {
    code_points
        .iter()
        .map(|&cp| property::property_of(cp).uppercase_mapping.unwrap_or(cp))
        .collect()
}

/// Default titlecase mapping, the same
/// shape as [`to_uppercase`] but for the titlecase field.
pub fn to_titlecase(code_points: &[u32]) -> Vec<u32> {
    code_points
        .iter()
        .map(|&cp| property::property_of(cp).titlecase_mapping.unwrap_or(cp))
        .collect()
}

/// D145: a canonical caseless match compares
/// `NFD(toCasefold(NFD(X)))` against `NFD(toCasefold(NFD(Y)))`. The
/// inner `NFD` exists only to handle combining Greek ypogegrammeni
/// correctly before folding; see [`case_fold`].
pub fn canonical_caseless_match(x: &[u32], y: &[u32]) -> Ordering {
    let fold_and_nfd = |cps: &[u32]| -> Vec<u32> {
        let cfg = nfd_cfg();
        decompose(&case_fold(cps), &cfg).unwrap_or_default()
    };
    fold_and_nfd(x).cmp(&fold_and_nfd(y))
}

/// Case folding: a
/// case-insensitive normal form, not itself a normalized string. Ties
/// off the context sensitivity of final sigma (position no longer
/// matters) and the special handling ß needs (it folds to "ss" rather
/// than matching capital SS).
///
/// The Greek ypogegrammeni-bearing codepoints (U+1F80..U+1FFC) are
/// canonically decomposed first, because their casefold mapping is
/// only correct once the ypogegrammeni is a separate combining
/// character.
pub fn case_fold(code_points: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(code_points.len());
    let cfg = nfd_cfg();
    for &cp in code_points {
        if is_ypogegrammeni_bearing(cp) {
            for d in decompose(&[cp], &cfg).unwrap_or_else(|_| vec![cp]) {
                out.extend(
                    property::property_of(d)
                        .casefold_mapping
                        .map(<[u32]>::to_vec)
                        .unwrap_or_else(|| vec![d]),
                );
            }
        } else {
            out.extend(
                property::property_of(cp)
                    .casefold_mapping
                    .map(<[u32]>::to_vec)
                    .unwrap_or_else(|| vec![cp]),
            );
        }
    }
    out
}

fn is_ypogegrammeni_bearing(cp: u32) -> bool {
    (0x1F80..=0x1FFC).contains(&cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_final_sigma() {
        // SIGMA at end of word -> final sigma
        assert_eq!(to_lowercase(&[0x0391, 0x03A3]), vec![0x03B1, 0x03C2]);
        // SIGMA mid-word -> regular sigma
        assert_eq!(
            to_lowercase(&[0x0391, 0x03A3, 0x0392]),
            vec![0x03B1, 0x03C3, 0x03B2]
        );
    }

    #[test]
    fn lowercase_capital_i_with_dot_above() {
        assert_eq!(to_lowercase(&[0x0130]), vec![0x0069, 0x0307]);
    }

    #[test]
    fn lowercase_passes_through_unmapped() {
        assert_eq!(to_lowercase(&[0x002E]), vec![0x002E]);
    }

    #[test]
    fn uppercase_simple_mapping() {
        assert_eq!(to_uppercase(&[0x0061]), vec![0x0041]);
        assert_eq!(to_uppercase(&[0x002E]), vec![0x002E]);
    }

    #[test]
    fn case_fold_final_sigma_both_fold_the_same() {
        let upper = case_fold(&[0x03A3]);
        let lower = case_fold(&[0x03C2]);
        assert_eq!(upper, lower);
    }

    #[test]
    fn case_fold_ypogegrammeni_decomposes_then_folds() {
        // 1F80 canonically decomposes to alpha + psili + ypogegrammeni;
        // none of those three has its own casefold mapping, so folding
        // routes through the decomposition rather than losing the mark.
        assert_eq!(case_fold(&[0x1F80]), vec![0x03B1, 0x0313, 0x0345]);
    }

    #[test]
    fn canonical_caseless_match_ignores_case() {
        assert_eq!(
            canonical_caseless_match(&[0x0041], &[0x0061]),
            Ordering::Equal
        );
    }
}
