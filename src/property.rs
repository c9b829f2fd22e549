//! The property oracle: a total, read-only function from
//! codepoint to `PropertyRecord`, backed by the generated tables in
//! [`crate::tables`]. Unassigned codepoints get a record with
//! `category = Category::Cn` and every other field zeroed/absent.

use crate::tables;

/// First element of the Hangul syllable block, grounded on the standard UAX #29/#15
/// jamo arithmetic.
pub const S_BASE: u32 = 0xAC00;
pub const L_BASE: u32 = 0x1100;
pub const V_BASE: u32 = 0x1161;
pub const T_BASE: u32 = 0x11A7;
pub const L_COUNT: u32 = 19;
pub const V_COUNT: u32 = 21;
pub const T_COUNT: u32 = 28;
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

pub fn is_hangul_l(cp: u32) -> bool {
    (L_BASE..L_BASE + L_COUNT).contains(&cp)
}

pub fn is_hangul_v(cp: u32) -> bool {
    (V_BASE..V_BASE + V_COUNT).contains(&cp)
}

pub fn is_hangul_t(cp: u32) -> bool {
    (T_BASE + 1..T_BASE + T_COUNT).contains(&cp)
}

pub fn is_hangul_syllable(cp: u32) -> bool {
    (S_BASE..S_BASE + S_COUNT).contains(&cp)
}

/// Decompose a Hangul syllable into its jamo, algorithmically: Hangul
/// never needs a table entry.
pub fn hangul_decompose(cp: u32) -> Option<(u32, u32, Option<u32>)> {
    if !is_hangul_syllable(cp) {
        return None;
    }
    let sindex = cp - S_BASE;
    let l = L_BASE + sindex / N_COUNT;
    let v = V_BASE + (sindex % N_COUNT) / T_COUNT;
    let t = T_BASE + sindex % T_COUNT;
    let t = if t == T_BASE { None } else { Some(t) };
    Some((l, v, t))
}

/// Compose a leading consonant and vowel into an `LV` syllable.
pub fn hangul_compose_lv(l: u32, v: u32) -> Option<u32> {
    if !is_hangul_l(l) || !is_hangul_v(v) {
        return None;
    }
    let lindex = l - L_BASE;
    let vindex = v - V_BASE;
    Some(S_BASE + (lindex * V_COUNT + vindex) * T_COUNT)
}

/// Compose an `LV` syllable and a trailing consonant into an `LVT` syllable.
pub fn hangul_compose_lvt(lv: u32, t: u32) -> Option<u32> {
    if !is_hangul_syllable(lv) || !is_hangul_t(t) {
        return None;
    }
    if (lv - S_BASE) % T_COUNT != 0 {
        return None; // lv already has a trailing consonant
    }
    Some(lv + (t - T_BASE))
}

fn hangul_record(cp: u32) -> Option<PropertyRecord> {
    if is_hangul_l(cp) {
        return Some(PropertyRecord {
            boundclass: BoundClass::L,
            ..jamo_base()
        });
    }
    if is_hangul_v(cp) {
        return Some(PropertyRecord {
            boundclass: BoundClass::V,
            ..jamo_base()
        });
    }
    if is_hangul_t(cp) {
        return Some(PropertyRecord {
            boundclass: BoundClass::T,
            ..jamo_base()
        });
    }
    if is_hangul_syllable(cp) {
        let sindex = cp - S_BASE;
        let boundclass = if sindex % T_COUNT == 0 {
            BoundClass::Lv
        } else {
            BoundClass::Lvt
        };
        return Some(PropertyRecord {
            boundclass,
            ..jamo_base()
        });
    }
    None
}

const fn jamo_base() -> PropertyRecord {
    PropertyRecord {
        category: Category::Lo,
        combining_class: 0,
        bidi_class: BidiClass::L,
        decomp_type: DecompType::Canonical,
        decomp_mapping: None,
        casefold_mapping: None,
        uppercase_mapping: None,
        lowercase_mapping: None,
        titlecase_mapping: None,
        comb1st_index: -1,
        comb2nd_index: -1,
        bidi_mirrored: false,
        comp_exclusion: false,
        ignorable: false,
        control_boundary: false,
        boundclass: BoundClass::Other,
        charwidth: 2,
    }
}

/// General category, the standard UAX44 30-value partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Category {
    Lu,
    Ll,
    Lt,
    Lm,
    Lo,
    Mn,
    Mc,
    Me,
    Nd,
    Nl,
    No,
    Pc,
    Pd,
    Ps,
    Pe,
    Pi,
    Pf,
    Po,
    Sm,
    Sc,
    Sk,
    So,
    Zs,
    Zl,
    Zp,
    Cc,
    Cf,
    Cs,
    Co,
    Cn,
}

impl Category {
    /// `true` for Mn/Mc/Me — the categories `STRIPMARK` drops.
    pub fn is_mark(self) -> bool {
        matches!(self, Category::Mn | Category::Mc | Category::Me)
    }
}

/// `true` if `cp` is a cased letter: it has a case mapping, or its
/// general category is Lu/Ll/Lt (the non-tailored approximation of the
/// derived `Cased` property used by the final-sigma rule).
pub fn cased(cp: u32) -> bool {
    let rec = property_of(cp);
    matches!(rec.category, Category::Lu | Category::Ll | Category::Lt)
        || rec.uppercase_mapping.is_some()
        || rec.lowercase_mapping.is_some()
        || rec.titlecase_mapping.is_some()
}

/// `true` if `cp` is case-ignorable (the non-tailored approximation of
/// the derived `Case_Ignorable` property: nonspacing/enclosing marks,
/// format characters, and modifier letters/symbols, per UAX #44).
pub fn case_ignorable(cp: u32) -> bool {
    matches!(
        property_of(cp).category,
        Category::Mn | Category::Me | Category::Cf | Category::Lm | Category::Sk
    )
}

/// Bidirectional class, carried through the pipeline but never acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum BidiClass {
    L,
    R,
    Al,
    En,
    Es,
    Et,
    An,
    Cs,
    Nsm,
    Bn,
    B,
    S,
    Ws,
    On,
    Lre,
    Lro,
    Rle,
    Rlo,
    Pdf,
    Lri,
    Rli,
    Fsi,
    Pdi,
}

/// The formatting tag on a compatibility decomposition, or `Canonical`
/// when a mapping has no tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DecompType {
    Canonical,
    Font,
    NoBreak,
    Initial,
    Medial,
    Final,
    Isolated,
    Circle,
    Super,
    Sub,
    Vertical,
    Wide,
    Narrow,
    Small,
    Square,
    Fraction,
    Compat,
}

/// Grapheme-cluster boundary class: a 13-value simplified set that
/// folds ZWJ into `Extend` and omits the obsolete emoji-only values
/// `E_Base`/`E_Modifier`/`Glue_After_Zwj` that a fuller UAX #29
/// implementation would carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum BoundClass {
    Other,
    Cr,
    Lf,
    Control,
    Extend,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    Lv,
    Lvt,
    RegionalIndicator,
}

/// An immutable, shared property record for one codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRecord {
    pub category: Category,
    pub combining_class: u8,
    pub bidi_class: BidiClass,
    pub decomp_type: DecompType,
    pub decomp_mapping: Option<&'static [u32]>,
    pub casefold_mapping: Option<&'static [u32]>,
    pub uppercase_mapping: Option<u32>,
    pub lowercase_mapping: Option<u32>,
    pub titlecase_mapping: Option<u32>,
    pub comb1st_index: i32,
    pub comb2nd_index: i32,
    pub bidi_mirrored: bool,
    pub comp_exclusion: bool,
    pub ignorable: bool,
    pub control_boundary: bool,
    pub boundclass: BoundClass,
    pub charwidth: u8,
}

const UNASSIGNED: PropertyRecord = PropertyRecord {
    category: Category::Cn,
    combining_class: 0,
    bidi_class: BidiClass::On,
    decomp_type: DecompType::Canonical,
    decomp_mapping: None,
    casefold_mapping: None,
    uppercase_mapping: None,
    lowercase_mapping: None,
    titlecase_mapping: None,
    comb1st_index: -1,
    comb2nd_index: -1,
    bidi_mirrored: false,
    comp_exclusion: false,
    ignorable: false,
    control_boundary: false,
    boundclass: BoundClass::Other,
    charwidth: 1,
};

/// Total function: look up the property record for any codepoint in
/// `0..=0x10FFFF`. Codepoints absent from the embedded tables come
/// back as `UNASSIGNED`, except that `charwidth` falls back to the
/// interval-based heuristic in [`charwidth`] rather than a flat 1,
/// since that function is meant to behave sensibly even for
/// codepoints the curated table omits.
pub fn property_of(cp: u32) -> PropertyRecord {
    if let Some(rec) = tables::lookup(cp) {
        return *rec;
    }
    if let Some(rec) = hangul_record(cp) {
        return rec;
    }
    PropertyRecord {
        charwidth: charwidth(cp),
        ..UNASSIGNED
    }
}

/// Look up the canonical composite of a valid `(comb1st_index,
/// comb2nd_index)` pair, or `None`.
pub fn compose_pair(comb1st_index: i32, comb2nd_index: i32) -> Option<u32> {
    if comb1st_index < 0 || comb2nd_index < 0 {
        return None;
    }
    tables::COMPOSITION_TABLE
        .iter()
        .find(|&&(i, j, _)| i == comb1st_index && j == comb2nd_index)
        .map(|&(_, _, composite)| composite)
}

/// The ASCII-equivalent lump-table mapping for `cp`, if any. `nlf2lf`
/// controls whether line/paragraph separators lump to `\n`, which only
/// happens when the `NLF2LF` option is set.
pub fn lump(cp: u32, nlf2lf: bool) -> Option<u32> {
    if (cp == 0x2028 || cp == 0x2029) && nlf2lf {
        return Some(0x000A);
    }
    tables::LUMP_TABLE
        .iter()
        .find(|&&(from, _)| from == cp)
        .map(|&(_, to)| to)
}

/// `wcwidth`-style display width: 0, 1, or 2. Falls back to
/// interval checks (combining marks and C0/C1 controls are 0, common
/// CJK/fullwidth ranges are 2, everything else is 1) for codepoints not
/// present in the embedded table, so the function stays total even
/// over the curated subset's gaps.
pub fn charwidth(cp: u32) -> u8 {
    if let Some(rec) = tables::lookup(cp) {
        return rec.charwidth;
    }
    if cp == 0 {
        return 0;
    }
    if (0x0300..=0x036F).contains(&cp) // combining diacriticals
        || (0x0001..=0x001F).contains(&cp) // C0 controls
        || (0x007F..=0x009F).contains(&cp) // DEL + C1 controls
        || (0x200B..=0x200F).contains(&cp) // zero-width/format
    {
        return 0;
    }
    const WIDE_RANGES: &[(u32, u32)] = &[
        (0x1100, 0x115F),   // Hangul Jamo
        (0x2E80, 0x303E),   // CJK Radicals … CJK Symbols and Punctuation
        (0x3041, 0x33FF),   // Hiragana … CJK Compatibility
        (0x3400, 0x4DBF),   // CJK Unified Ideographs Extension A
        (0x4E00, 0x9FFF),   // CJK Unified Ideographs
        (0xA000, 0xA4CF),   // Yi Syllables/Radicals
        (0xAC00, 0xD7A3),   // Hangul Syllables
        (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
        (0xFF00, 0xFF60),   // Fullwidth Forms
        (0xFFE0, 0xFFE6),   // Fullwidth Signs
        (0x20000, 0x2FFFD), // Supplementary Ideographic Planes
    ];
    if WIDE_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp)) {
        return 2;
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_codepoint_is_cn() {
        // a gap no table entry covers
        let rec = property_of(0x0378);
        assert_eq!(rec.category, Category::Cn);
        assert_eq!(rec.combining_class, 0);
        assert!(rec.decomp_mapping.is_none());
    }

    #[test]
    fn charwidth_zero_for_control_and_combining() {
        assert_eq!(charwidth(0x0000), 0);
        assert_eq!(charwidth(0x0301), 0);
    }

    #[test]
    fn charwidth_two_for_cjk() {
        assert_eq!(charwidth(0x4E2D), 2);
    }

    #[test]
    fn charwidth_one_default() {
        assert_eq!(charwidth(0x0041), 1);
    }
}
