//! # lipi
//!
//! Bengali legacy-font glyph repair and voter record extraction.
//!
//! Election-commission lists pass through an exporter whose legacy font
//! encoding garbles Bengali conjuncts and vowel signs. This library
//! rewrites that text back into standard Unicode Bengali and extracts
//! structured voter/member records from semi-structured OCR dumps.
//!
//! ## Quick Start
//!
//! ```
//! use lipi::{extract_records, repair_text};
//!
//! // Fix a single corrupted string
//! let fixed = repair_text("Ïমাঃ করİম");
//! assert_eq!(fixed, "মোঃ করিম");
//!
//! // Extract records from pasted text
//! let records = extract_records("নাম: রহিম\nপিতা: করিম\n");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].father_name, "করিম");
//! ```
//!
//! ## Features
//!
//! - **Glyph repair**: artifact substitution table plus ordered
//!   contextual rewrites, NFC-normalized output
//! - **Three extraction modes**: JSON, labeled text blocks, and a
//!   single-pattern scan over concatenated OCR output
//! - **Normalization**: Bengali numerals to ASCII digits, honorific-based
//!   gender inference, field defaults
//! - **Bulk import seam**: chunked, deduplicating writes through a
//!   caller-supplied store

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod repair;
pub mod store;

// Re-export commonly used types
pub use detect::{has_artifacts, ArtifactScan};
pub use error::{Error, Result};
pub use extract::{ExtractMode, ExtractOptions, Extractor};
pub use model::{Gender, VoterRecord, DEFAULT_OCCUPATION, DEFAULT_PHOTO_URL};
pub use repair::{normalize_digits, GlyphRepair};
pub use store::{BulkImporter, BulkReport, DedupKey, MemoryStore, VoterStore};

/// Repair a single corrupted string.
///
/// Convenience wrapper constructing a [`GlyphRepair`] engine with the
/// documented rule set.
///
/// # Example
///
/// ```
/// let fixed = lipi::repair_text("ĺর");
/// assert_eq!(fixed, "ব্দর");
/// ```
pub fn repair_text(text: &str) -> String {
    GlyphRepair::new().repair(text)
}

/// Extract records from pasted text.
///
/// Tries JSON first and falls through to labeled-block parsing; returns
/// an empty list when nothing matches.
pub fn extract_records(text: &str) -> Vec<VoterRecord> {
    Extractor::default().extract(text)
}

/// Extract records from a whitespace-normalized OCR export.
///
/// Runs the single multi-field pattern across the whole document; for
/// records concatenated back-to-back without blank-line separators.
///
/// # Example
///
/// ```
/// let records = lipi::extract_ocr_records(
///     "1. নাম: X ভোটার নং: ১২৩ পিতা: Y মাতা: Z পেশা: কৃষি, জন্ম তারিখ: ০১/০১/১৯৯০",
/// );
/// assert_eq!(records[0].voter_number, "123");
/// ```
pub fn extract_ocr_records(text: &str) -> Vec<VoterRecord> {
    Extractor::new(ExtractOptions::new().ocr()).extract(text)
}

/// Builder tying extraction and bulk import together.
///
/// # Example
///
/// ```
/// use lipi::{DedupKey, Lipi, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// let report = Lipi::new()
///     .with_dedup_key(DedupKey::VoterNumber)
///     .import("নাম: রহিম\nভোটার নং: ১২৩\n", &mut store);
/// assert_eq!(report.inserted, 1);
/// ```
pub struct Lipi {
    extract_options: ExtractOptions,
    importer: BulkImporter,
}

impl Lipi {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            importer: BulkImporter::new(),
        }
    }

    /// Set the extraction mode.
    pub fn with_mode(mut self, mode: ExtractMode) -> Self {
        self.extract_options = self.extract_options.with_mode(mode);
        self
    }

    /// Use the single-pattern OCR strategy.
    pub fn ocr(mut self) -> Self {
        self.extract_options = self.extract_options.ocr();
        self
    }

    /// Override the default occupation placeholder.
    pub fn with_default_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.extract_options = self.extract_options.with_default_occupation(occupation);
        self
    }

    /// Set the records-per-chunk ceiling for imports.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.importer = self.importer.with_chunk_size(size);
        self
    }

    /// Set the deduplication key for imports.
    pub fn with_dedup_key(mut self, key: DedupKey) -> Self {
        self.importer = self.importer.with_dedup_key(key);
        self
    }

    /// Extract records without storing them.
    pub fn extract(&self, text: &str) -> Vec<VoterRecord> {
        Extractor::new(self.extract_options.clone()).extract(text)
    }

    /// Extract records and bulk-import them into the store.
    pub fn import<S: VoterStore>(&self, text: &str, store: &mut S) -> BulkReport {
        let records = self.extract(text);
        self.importer.run(store, &records)
    }
}

impl Default for Lipi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_text_convenience() {
        assert_eq!(repair_text(""), "");
        assert_eq!(repair_text("Ř"), "শ্র");
    }

    #[test]
    fn test_extract_records_auto_json() {
        let records = extract_records(r#"[{"name":"A","fatherName":"B"}]"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].father_name, "B");
    }

    #[test]
    fn test_builder_import_roundtrip() {
        let mut store = MemoryStore::new();
        let report = Lipi::new()
            .with_chunk_size(2)
            .import("নাম: রহিম\nভোটার নং: ১\n\nনাম: সালমা\nভোটার নং: ২\n", &mut store);
        assert_eq!(report.inserted, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_builder_extract_ocr() {
        let records = Lipi::new()
            .ocr()
            .extract("1. নাম: X ভোটার নং: ১ পিতা: Y মাতা: Z পেশা: কৃষি, জন্ম তারিখ: ১৯৯০");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].birth_date, "1990");
    }
}
