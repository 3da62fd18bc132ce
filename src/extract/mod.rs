//! Record extraction: pasted text in, normalized voter records out.
//!
//! Three independent input shapes are supported (JSON, labeled text
//! blocks, and a single multi-field OCR pattern); all of them funnel
//! through the same post-processing: glyph repair once per textual field,
//! digit normalization for the numeric fields, gender inference, and
//! field defaults. Extraction never fails on malformed input; it returns
//! an empty list.

mod json;
mod labeled;
mod ocr;
mod options;

pub use options::{ExtractMode, ExtractOptions};

use serde::Deserialize;

use crate::model::{Gender, VoterRecord};
use crate::repair::{normalize_digits, GlyphRepair};

/// Raw field values pulled out of one source block, before repair and
/// normalization. Doubles as the deserialization target for JSON mode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct RawFields {
    pub serial_number: String,
    pub name: String,
    pub father_name: String,
    pub mother_name: String,
    pub voter_number: String,
    pub birth_date: String,
    pub occupation: String,
    pub phone: String,
    pub photo_url: String,
    pub gender: Option<Gender>,
}

/// Record extraction engine.
///
/// Stateless between invocations: each call is independent given its
/// input, so running it redundantly (e.g. live as the user pastes) is
/// safe.
///
/// # Example
///
/// ```
/// use lipi::extract::Extractor;
///
/// let extractor = Extractor::default();
/// let records = extractor.extract("নাম: রহিম\nপিতা: করিম\n");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "রহিম");
/// ```
pub struct Extractor {
    options: ExtractOptions,
    repair: GlyphRepair,
    labeled: labeled::LabeledParser,
    ocr: ocr::OcrParser,
}

impl Extractor {
    /// Create an extractor with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            repair: GlyphRepair::new(),
            labeled: labeled::LabeledParser::new(),
            ocr: ocr::OcrParser::new(),
        }
    }

    /// Extract records from pasted text using the configured mode.
    pub fn extract(&self, text: &str) -> Vec<VoterRecord> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let raw = match self.options.mode {
            ExtractMode::Json => json::parse(text).unwrap_or_default(),
            ExtractMode::LabeledBlocks => self.labeled.parse(text),
            ExtractMode::OcrPattern => self.ocr.parse(text),
            ExtractMode::Auto => match json::parse(text) {
                Some(records) => records,
                None => self.labeled.parse(text),
            },
        };

        let records: Vec<VoterRecord> = raw
            .into_iter()
            .filter_map(|fields| self.finish(fields))
            .collect();
        log::debug!("extracted {} records", records.len());
        records
    }

    /// Access the repair engine this extractor cleans fields with.
    pub fn repair_engine(&self) -> &GlyphRepair {
        &self.repair
    }

    /// Turn raw field values into a normalized record, or drop the block.
    fn finish(&self, raw: RawFields) -> Option<VoterRecord> {
        let name = self.repair.repair(&raw.name);
        if name.is_empty() {
            // A block without a resolvable name yields zero records; this
            // is a per-block skip, not an abort.
            log::debug!("dropping block without a name (serial {:?})", raw.serial_number);
            return None;
        }

        let occupation = {
            let cleaned = self.repair.repair(&raw.occupation);
            if cleaned.is_empty() {
                self.options.default_occupation.clone()
            } else {
                cleaned
            }
        };
        let photo_url = if raw.photo_url.trim().is_empty() {
            self.options.default_photo_url.clone()
        } else {
            raw.photo_url.trim().to_string()
        };
        // Explicit gender from JSON input wins over the honorific heuristic.
        let gender = raw.gender.unwrap_or_else(|| Gender::infer(&name));

        Some(VoterRecord {
            serial_number: raw.serial_number.trim().to_string(),
            father_name: self.repair.repair(&raw.father_name),
            mother_name: self.repair.repair(&raw.mother_name),
            voter_number: normalize_digits(raw.voter_number.trim()),
            birth_date: normalize_digits(raw.birth_date.trim()),
            phone: raw.phone.trim().to_string(),
            name,
            occupation,
            gender,
            photo_url,
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}
