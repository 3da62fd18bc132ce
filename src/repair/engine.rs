//! Glyph repair engine.
//!
//! Rewrites text produced through the broken legacy font mapping back into
//! well-formed Unicode Bengali: a character substitution pass over the
//! artifact table, then a fixed sequence of contextual rewrites, then
//! canonical composition and a trim.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::model::VoterRecord;
use crate::repair::charmap;

/// Ordered contextual rewrites applied after character substitution.
///
/// The order is load-bearing. The title fixes look for the misplaced
/// vowel sign the character map just produced; the whitespace collapses
/// below them re-attach vowel signs the exporter split from their
/// consonant. Rules run strictly one after another, never as one merged
/// pass: a rule may match text created by an earlier rule.
const REWRITE_RULES: &[(&str, &str)] = &[
    // Common titles and labels with the vowel sign flipped ahead of the
    // consonant it belongs to.
    ("োমাছাঃ", "মোছাঃ"), // Mrs./feminine honorific
    ("োমাঃ", "মোঃ"),     // Mr.
    ("োভাটার", "ভোটার"), // voter
    ("িপতা", "পিতা"),     // father
    ("ামাতা", "মাতা"),    // mother
    ("োপেশা", "পেশা"),    // occupation
    // Vowel signs separated from their consonant by spurious whitespace.
    ("\u{09C7}\\s*\u{09BE}", "\u{09CB}"), // ে ... া -> ো
    ("\u{09C7}\\s*\u{09D7}", "\u{09CC}"), // ে ... ৗ -> ৌ
    ("\u{09BF}\\s+", "\u{09BF}"),         // ি
    ("\u{09C1}\\s+", "\u{09C1}"),         // ু
    ("\u{09B0}\u{09CD}\\s+", "\u{09B0}\u{09CD}"), // র্
];

/// Glyph repair engine.
///
/// Pure and deterministic: the same input always yields the same output,
/// and an empty input yields an empty string. Re-running the engine on
/// its own output is a no-op for the shipped rule set.
///
/// # Example
///
/// ```
/// use lipi::repair::GlyphRepair;
///
/// let repair = GlyphRepair::new();
/// assert_eq!(repair.repair("Ï"), "ো");
/// assert_eq!(repair.repair("  মোঃ করিম  "), "মোঃ করিম");
/// ```
pub struct GlyphRepair {
    rewrites: Vec<(Regex, &'static str)>,
}

impl GlyphRepair {
    /// Create a new engine with the documented rule set.
    pub fn new() -> Self {
        Self {
            rewrites: REWRITE_RULES
                .iter()
                .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
                .collect(),
        }
    }

    /// Repair a single string.
    ///
    /// Every occurrence of a mapped artifact codepoint is replaced
    /// independently; unmapped characters pass through. The contextual
    /// rewrites then run in their fixed order, and the result is
    /// NFC-normalized and trimmed.
    pub fn repair(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        // Stage 1: character substitution over the artifact table
        let mut substituted = String::with_capacity(text.len());
        for c in text.chars() {
            match charmap::substitution(c) {
                Some(replacement) => substituted.push_str(replacement),
                None => substituted.push(c),
            }
        }

        // Stage 2: ordered contextual rewrites
        let mut result = substituted;
        for (pattern, replacement) in &self.rewrites {
            result = pattern.replace_all(&result, *replacement).to_string();
        }

        // Stage 3: canonical composition, then trim
        result.nfc().collect::<String>().trim().to_string()
    }

    /// Repair the textual fields of an already-stored record.
    ///
    /// Used for targeted post-hoc correction of individually flagged bad
    /// records, distinct from bulk import. Numeric fields and identifiers
    /// are left alone.
    pub fn repair_record(&self, record: &VoterRecord) -> VoterRecord {
        VoterRecord {
            name: self.repair(&record.name),
            father_name: self.repair(&record.father_name),
            mother_name: self.repair(&record.mother_name),
            occupation: self.repair(&record.occupation),
            ..record.clone()
        }
    }
}

impl Default for GlyphRepair {
    fn default() -> Self {
        Self::new()
    }
}
