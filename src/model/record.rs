//! Voter record types.

use serde::{Deserialize, Serialize};

/// Occupation used when a source block carries none ("voter").
pub const DEFAULT_OCCUPATION: &str = "ভোটার";

/// Placeholder avatar used when no photo is supplied.
pub const DEFAULT_PHOTO_URL: &str = "https://cdn-icons-png.flaticon.com/512/149/149071.png";

/// Gender of a voter.
///
/// This value is *inferred*, not extracted: the election-commission dumps
/// carry no gender column, so it is derived from feminine honorific
/// markers ("মোছাঃ", "মোসাঃ") in the cleaned name and defaults to `Male`
/// otherwise. Treat it as a data-quality heuristic, never as ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// No feminine honorific marker found (the default).
    #[default]
    Male,
    /// A feminine honorific marker was found in the cleaned name.
    Female,
}

/// Feminine Muslim-naming honorifics that trigger `Gender::Female`.
const FEMALE_MARKERS: &[&str] = &["মোছাঃ", "মোসাঃ"];

impl Gender {
    /// Infer gender from a cleaned name.
    ///
    /// # Example
    ///
    /// ```
    /// use lipi::Gender;
    ///
    /// assert_eq!(Gender::infer("মোছাঃ রাবেয়া খাতুন"), Gender::Female);
    /// assert_eq!(Gender::infer("মোঃ রহিম উদ্দিন"), Gender::Male);
    /// ```
    pub fn infer(name: &str) -> Self {
        if FEMALE_MARKERS.iter().any(|marker| name.contains(marker)) {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

/// A normalized voter/member record produced by extraction.
///
/// Records are ephemeral: built in memory from pasted text, optionally
/// reviewed, then handed off in bulk to a [`VoterStore`](crate::store::VoterStore).
/// The serde shape matches the camelCase documents the hosted store holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoterRecord {
    /// Positional identifier from the source list. Preserved as given;
    /// not guaranteed unique or numeric-sortable.
    pub serial_number: String,

    /// Full name. A record is only materialized when this is non-empty
    /// after glyph repair.
    pub name: String,

    /// Father's name, empty when absent.
    pub father_name: String,

    /// Mother's name, empty when absent.
    pub mother_name: String,

    /// National ID / voter ID. ASCII digits after normalization.
    pub voter_number: String,

    /// Free-form date string, commonly DD/MM/YYYY. Digits normalized,
    /// no calendar validation.
    pub birth_date: String,

    /// Occupation, defaulting to [`DEFAULT_OCCUPATION`].
    pub occupation: String,

    /// Inferred gender, see [`Gender`].
    pub gender: Gender,

    /// Phone-like identifier the store dedups member documents by.
    /// Empty unless supplied by the caller.
    pub phone: String,

    /// Photo URL, defaulting to [`DEFAULT_PHOTO_URL`].
    pub photo_url: String,
}

impl VoterRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the record carries a usable name.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
