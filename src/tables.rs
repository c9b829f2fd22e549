//! Generated property data, in the shape the real `unicode-normalization`
//! crate's `tables.rs` uses: static arrays consulted by [`crate::property`].
//!
//! This is a curated, representative subset of the Unicode Character
//! Database, not the full ~1.1 million assigned codepoints — see
//! `DESIGN.md` for the scope decision. The lookup architecture (sorted
//! array + binary search, index-pair composition table) is the same
//! shape a full table would use, so swapping in a complete generated
//! table later is a data-only change.
//!
//! @generated

use crate::property::{BidiClass, BoundClass, Category, DecompType, PropertyRecord};

#[allow(clippy::too_many_arguments)]
const fn entry(
    cp: u32,
    category: Category,
    combining_class: u8,
    bidi_class: BidiClass,
    decomp_type: DecompType,
    decomp_mapping: Option<&'static [u32]>,
    casefold_mapping: Option<&'static [u32]>,
    uppercase_mapping: Option<u32>,
    lowercase_mapping: Option<u32>,
    titlecase_mapping: Option<u32>,
    comb1st_index: i32,
    comb2nd_index: i32,
    comp_exclusion: bool,
    ignorable: bool,
    boundclass: BoundClass,
    charwidth: u8,
) -> (u32, PropertyRecord) {
    (
        cp,
        PropertyRecord {
            category,
            combining_class,
            bidi_class,
            decomp_type,
            decomp_mapping,
            casefold_mapping,
            uppercase_mapping,
            lowercase_mapping,
            titlecase_mapping,
            comb1st_index,
            comb2nd_index,
            bidi_mirrored: false,
            comp_exclusion,
            ignorable,
            control_boundary: matches!(category, Category::Cc),
            boundclass,
            charwidth,
        },
    )
}

// Composition participant indices. These are internal to this table and
// have no meaning outside `comb1st_index`/`comb2nd_index`.
const FIRST_A: i32 = 0;
const FIRST_E: i32 = 1;
const FIRST_O: i32 = 2;
const FIRST_U: i32 = 3;
const FIRST_LA: i32 = 4;
const FIRST_LE: i32 = 5;
const FIRST_LO: i32 = 6;
const FIRST_LU: i32 = 7;
const FIRST_LN: i32 = 8;
const FIRST_UN: i32 = 9;
const FIRST_LC: i32 = 10;
const FIRST_UC: i32 = 11;

const SECOND_DIAERESIS: i32 = 0;
const SECOND_ACUTE: i32 = 1;
const SECOND_RING_ABOVE: i32 = 2;
const SECOND_TILDE: i32 = 3;
const SECOND_CEDILLA: i32 = 4;

/// `(comb1st_index, comb2nd_index, composite)`, the sparse pairwise
/// composition table compose_pair binary-searches.
pub static COMPOSITION_TABLE: &[(i32, i32, u32)] = &[
    (FIRST_A, SECOND_ACUTE, 0x00C1),     // A + ́ -> Á
    (FIRST_A, SECOND_DIAERESIS, 0x00C4), // A + ̈ -> Ä
    (FIRST_A, SECOND_RING_ABOVE, 0x00C5), // A + ̊ -> Å
    (FIRST_E, SECOND_ACUTE, 0x00C9),     // E + ́ -> É
    (FIRST_O, SECOND_DIAERESIS, 0x00D6), // O + ̈ -> Ö
    (FIRST_U, SECOND_DIAERESIS, 0x00DC), // U + ̈ -> Ü
    (FIRST_UN, SECOND_TILDE, 0x00D1),    // N + ̃ -> Ñ
    (FIRST_UC, SECOND_CEDILLA, 0x00C7),  // C + ̧ -> Ç
    (FIRST_LA, SECOND_ACUTE, 0x00E1),    // a + ́ -> á
    (FIRST_LA, SECOND_DIAERESIS, 0x00E4), // a + ̈ -> ä
    (FIRST_LE, SECOND_ACUTE, 0x00E9),    // e + ́ -> é
    (FIRST_LO, SECOND_DIAERESIS, 0x00F6), // o + ̈ -> ö
    (FIRST_LU, SECOND_DIAERESIS, 0x00FC), // u + ̈ -> ü
    (FIRST_LN, SECOND_TILDE, 0x00F1),    // n + ̃ -> ñ
    (FIRST_LC, SECOND_CEDILLA, 0x00E7),  // c + ̧ -> ç
];

/// `(from, to)` ASCII-lumping pairs. Line/paragraph
/// separators are handled separately in [`crate::property::lump`]
/// since they depend on the `NLF2LF` option.
pub static LUMP_TABLE: &[(u32, u32)] = &[
    (0x00A0, 0x0020), // NO-BREAK SPACE -> SPACE
    (0x2000, 0x0020), // EN QUAD
    (0x2001, 0x0020), // EM QUAD
    (0x2002, 0x0020), // EN SPACE
    (0x2003, 0x0020), // EM SPACE
    (0x2004, 0x0020), // THREE-PER-EM SPACE
    (0x2005, 0x0020), // FOUR-PER-EM SPACE
    (0x2006, 0x0020), // SIX-PER-EM SPACE
    (0x2007, 0x0020), // FIGURE SPACE
    (0x2008, 0x0020), // PUNCTUATION SPACE
    (0x2009, 0x0020), // THIN SPACE
    (0x200A, 0x0020), // HAIR SPACE
    (0x2013, 0x002D), // EN DASH -> HYPHEN-MINUS
    (0x2014, 0x002D), // EM DASH -> HYPHEN-MINUS
    (0x2018, 0x0027), // LEFT SINGLE QUOTATION MARK -> APOSTROPHE
    (0x2019, 0x0027), // RIGHT SINGLE QUOTATION MARK -> APOSTROPHE
    (0x201C, 0x0022), // LEFT DOUBLE QUOTATION MARK -> QUOTATION MARK
    (0x201D, 0x0022), // RIGHT DOUBLE QUOTATION MARK -> QUOTATION MARK
];

static TABLE: &[(u32, PropertyRecord)] = &[
    // ---- C0 controls ----
    entry(0x0000, Category::Cc, 0, BidiClass::Bn, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Control, 0),
    entry(0x0009, Category::Cc, 0, BidiClass::S, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Control, 0),
    entry(0x000A, Category::Cc, 0, BidiClass::B, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Lf, 0),
    entry(0x000B, Category::Cc, 0, BidiClass::Bn, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Control, 0),
    entry(0x000C, Category::Cc, 0, BidiClass::Ws, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Control, 0),
    entry(0x000D, Category::Cc, 0, BidiClass::B, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Cr, 0),
    entry(0x001B, Category::Cc, 0, BidiClass::Bn, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Control, 0),
    entry(0x007F, Category::Cc, 0, BidiClass::Bn, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Control, 0),
    // ---- C1 controls / NEL ----
    entry(0x0085, Category::Cc, 0, BidiClass::B, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Control, 0),
    // ---- ASCII letters used as composition starters ----
    entry(0x0041, Category::Lu, 0, BidiClass::L, DecompType::Canonical, None, None, None, Some(0x0061), None, FIRST_A, -1, false, false, BoundClass::Other, 1),
    entry(0x0043, Category::Lu, 0, BidiClass::L, DecompType::Canonical, None, None, None, Some(0x0063), None, FIRST_UC, -1, false, false, BoundClass::Other, 1),
    entry(0x0045, Category::Lu, 0, BidiClass::L, DecompType::Canonical, None, None, None, Some(0x0065), None, FIRST_E, -1, false, false, BoundClass::Other, 1),
    entry(0x004E, Category::Lu, 0, BidiClass::L, DecompType::Canonical, None, None, None, Some(0x006E), None, FIRST_UN, -1, false, false, BoundClass::Other, 1),
    entry(0x004F, Category::Lu, 0, BidiClass::L, DecompType::Canonical, None, None, None, Some(0x006F), None, FIRST_O, -1, false, false, BoundClass::Other, 1),
    entry(0x0055, Category::Lu, 0, BidiClass::L, DecompType::Canonical, None, None, None, Some(0x0075), None, FIRST_U, -1, false, false, BoundClass::Other, 1),
    entry(0x0061, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x0041), None, Some(0x0041), FIRST_LA, -1, false, false, BoundClass::Other, 1),
    entry(0x0063, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x0043), None, Some(0x0043), FIRST_LC, -1, false, false, BoundClass::Other, 1),
    entry(0x0065, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x0045), None, Some(0x0045), FIRST_LE, -1, false, false, BoundClass::Other, 1),
    entry(0x0066, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x0046), None, Some(0x0046), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x0069, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x0049), None, Some(0x0049), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x006E, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x004E), None, Some(0x004E), FIRST_LN, -1, false, false, BoundClass::Other, 1),
    entry(0x006F, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x004F), None, Some(0x004F), FIRST_LO, -1, false, false, BoundClass::Other, 1),
    entry(0x0075, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x0055), None, Some(0x0055), FIRST_LU, -1, false, false, BoundClass::Other, 1),
    // ---- combining diacritical marks ----
    entry(0x0301, Category::Mn, 230, BidiClass::Nsm, DecompType::Canonical, None, None, None, None, None, -1, SECOND_ACUTE, false, false, BoundClass::Extend, 0),
    entry(0x0303, Category::Mn, 230, BidiClass::Nsm, DecompType::Canonical, None, None, None, None, None, -1, SECOND_TILDE, false, false, BoundClass::Extend, 0),
    entry(0x0308, Category::Mn, 230, BidiClass::Nsm, DecompType::Canonical, None, None, None, None, None, -1, SECOND_DIAERESIS, false, false, BoundClass::Extend, 0),
    entry(0x030A, Category::Mn, 230, BidiClass::Nsm, DecompType::Canonical, None, None, None, None, None, -1, SECOND_RING_ABOVE, false, false, BoundClass::Extend, 0),
    entry(0x0327, Category::Mn, 202, BidiClass::Nsm, DecompType::Canonical, None, None, None, None, None, -1, SECOND_CEDILLA, false, false, BoundClass::SpacingMark, 0),
    entry(0x0345, Category::Mn, 240, BidiClass::Nsm, DecompType::Canonical, None, None, None, None, None, -1, -1, false, true, BoundClass::Extend, 0),
    // ---- precomposed Latin-1 Supplement composites ----
    entry(0x00C1, Category::Lu, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0041, 0x0301]), None, None, Some(0x00E1), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00C4, Category::Lu, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0041, 0x0308]), None, None, Some(0x00E4), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00C5, Category::Lu, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0041, 0x030A]), None, None, Some(0x00E5), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00C7, Category::Lu, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0043, 0x0327]), None, None, Some(0x00E7), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00C9, Category::Lu, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0045, 0x0301]), None, None, Some(0x00E9), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00D1, Category::Lu, 0, BidiClass::L, DecompType::Canonical, Some(&[0x004E, 0x0303]), None, None, Some(0x00F1), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00D6, Category::Lu, 0, BidiClass::L, DecompType::Canonical, Some(&[0x004F, 0x0308]), None, None, Some(0x00F6), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00DC, Category::Lu, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0055, 0x0308]), None, None, Some(0x00FC), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00E1, Category::Ll, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0061, 0x0301]), None, Some(0x00C1), None, Some(0x00C1), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00E4, Category::Ll, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0061, 0x0308]), None, Some(0x00C4), None, Some(0x00C4), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00E5, Category::Ll, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0061, 0x030A]), None, Some(0x00C5), None, Some(0x00C5), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00E7, Category::Ll, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0063, 0x0327]), None, Some(0x00C7), None, Some(0x00C7), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00E9, Category::Ll, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0065, 0x0301]), None, Some(0x00C9), None, Some(0x00C9), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00F1, Category::Ll, 0, BidiClass::L, DecompType::Canonical, Some(&[0x006E, 0x0303]), None, Some(0x00D1), None, Some(0x00D1), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00F6, Category::Ll, 0, BidiClass::L, DecompType::Canonical, Some(&[0x006F, 0x0308]), None, Some(0x00D6), None, Some(0x00D6), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x00FC, Category::Ll, 0, BidiClass::L, DecompType::Canonical, Some(&[0x0075, 0x0308]), None, Some(0x00DC), None, Some(0x00DC), -1, -1, false, false, BoundClass::Other, 1),
    // ---- Greek (final sigma, ypogegrammeni) ----
    entry(0x0391, Category::Lu, 0, BidiClass::L, DecompType::Canonical, None, None, None, Some(0x03B1), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x0392, Category::Lu, 0, BidiClass::L, DecompType::Canonical, None, None, None, Some(0x03B2), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x03A3, Category::Lu, 0, BidiClass::L, DecompType::Canonical, None, Some(&[0x03C3]), None, Some(0x03C3), None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x03B1, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x0391), None, Some(0x0391), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x03B2, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x0392), None, Some(0x0392), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x03C2, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, Some(&[0x03C3]), Some(0x03A3), None, Some(0x03A3), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x03C3, Category::Ll, 0, BidiClass::L, DecompType::Canonical, None, None, Some(0x03A3), None, Some(0x03A3), -1, -1, false, false, BoundClass::Other, 1),
    entry(0x1F80, Category::Ll, 0, BidiClass::L, DecompType::Canonical, Some(&[0x03B1, 0x0313, 0x0345]), Some(&[0x1F00, 0x0345]), None, None, None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x0313, Category::Mn, 230, BidiClass::Nsm, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Extend, 0),
    entry(0x1F00, Category::Ll, 0, BidiClass::L, DecompType::Canonical, Some(&[0x03B1, 0x0313]), None, None, None, None, -1, -1, false, false, BoundClass::Other, 1),
    // ---- ligature (compatibility decomposition) ----
    entry(0xFB01, Category::Ll, 0, BidiClass::L, DecompType::Compat, Some(&[0x0066, 0x0069]), None, None, None, None, -1, -1, false, false, BoundClass::Other, 1),
    // ---- format/default-ignorable and boundary classes ----
    entry(0x00AD, Category::Cf, 0, BidiClass::Bn, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Other, 0),
    entry(0x00A0, Category::Zs, 0, BidiClass::Cs, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Other, 1),
    entry(0x0600, Category::Cf, 0, BidiClass::An, DecompType::Canonical, None, None, None, None, None, -1, -1, false, true, BoundClass::Prepend, 1),
    entry(0x200C, Category::Cf, 0, BidiClass::Bn, DecompType::Canonical, None, None, None, None, None, -1, -1, false, true, BoundClass::Extend, 0),
    entry(0x200D, Category::Cf, 0, BidiClass::Bn, DecompType::Canonical, None, None, None, None, None, -1, -1, false, true, BoundClass::Extend, 0),
    entry(0x2028, Category::Zl, 0, BidiClass::Ws, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Control, 0),
    entry(0x2029, Category::Zp, 0, BidiClass::B, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::Control, 0),
    entry(0xFE0F, Category::Mn, 0, BidiClass::Nsm, DecompType::Canonical, None, None, None, None, None, -1, -1, false, true, BoundClass::Extend, 0),
    entry(0x1F1E6, Category::So, 0, BidiClass::L, DecompType::Canonical, None, None, None, None, None, -1, -1, false, false, BoundClass::RegionalIndicator, 1),
];

/// Look up `cp` in the curated table. Entries are grouped by theme
/// rather than sorted by codepoint, so this is a linear scan rather
/// than the binary search a full, codepoint-sorted generated table
/// would use.
pub fn lookup(cp: u32) -> Option<&'static PropertyRecord> {
    TABLE.iter().find(|&&(c, _)| c == cp).map(|(_, rec)| rec)
}
