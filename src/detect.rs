//! Artifact detection for stored records.
//!
//! The correction workflow only rewrites records that actually carry
//! broken glyphs; these helpers flag them without touching clean text.

use crate::repair::{is_artifact, ARTIFACT_MAP};

/// Result of scanning a string for artifact glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtifactScan {
    /// Occurrence count per artifact codepoint, in table order.
    /// Artifacts that never occur are omitted.
    pub counts: Vec<(char, usize)>,
    /// Total artifact occurrences.
    pub total: usize,
}

impl ArtifactScan {
    /// Check whether the scan found anything.
    pub fn is_clean(&self) -> bool {
        self.total == 0
    }
}

/// Check whether a string contains any known artifact glyph.
///
/// # Example
///
/// ```
/// use lipi::detect::has_artifacts;
///
/// assert!(has_artifacts("Ïমাঃ করİম"));
/// assert!(!has_artifacts("মোঃ করিম"));
/// ```
pub fn has_artifacts(text: &str) -> bool {
    text.chars().any(is_artifact)
}

/// Scan a string and report which artifact glyphs occur, and how often.
pub fn scan(text: &str) -> ArtifactScan {
    let mut counts = Vec::new();
    let mut total = 0;
    for (artifact, _) in ARTIFACT_MAP {
        let n = text.chars().filter(|c| c == artifact).count();
        if n > 0 {
            counts.push((*artifact, n));
            total += n;
        }
    }
    ArtifactScan { counts, total }
}
