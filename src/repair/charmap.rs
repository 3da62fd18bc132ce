//! Artifact glyph substitution table.
//!
//! The legacy exporter rendered Bengali through a font whose codepoints do
//! not line up with Unicode: a single Latin or Bengali codepoint stands in
//! for one or more garbled glyphs. This table is a versioned fixture
//! observed from real exports, not a general font-decoding scheme; extend
//! the table when a new corruption variant shows up.

/// Mapping from artifact codepoints to their correct Bengali text.
pub const ARTIFACT_MAP: &[(char, &'static str)] = &[
    ('ĺ', "ব্দ"),   // U+013A
    ('Ĩ', "সা"),    // U+0128
    ('ę', "দ্র"),   // U+0119
    ('Ľ', "ব্র"),   // U+013D
    ('Ō', "ছা"),    // U+014C
    ('Ž', "জ"),     // U+017D
    ('ñ', "ন"),     // U+00F1
    ('ĥ', "ন্ম"),   // U+0125
    ('ń', "ম্ব"),   // U+0144
    ('İ', "ি"),     // U+0130
    ('Ï', "ো"),     // U+00CF
    ('Ř', "শ্র"),   // U+0158
    ('ý', "গঞ্জ"),  // U+00FD
    ('ঁ', "া"),     // U+0981 (candrabindu misused as aa-kar)
];

/// Look up the substitution for a single artifact codepoint.
pub fn substitution(c: char) -> Option<&'static str> {
    ARTIFACT_MAP
        .iter()
        .find(|(artifact, _)| *artifact == c)
        .map(|(_, replacement)| *replacement)
}

/// Check whether a codepoint is a known artifact.
pub fn is_artifact(c: char) -> bool {
    substitution(c).is_some()
}
