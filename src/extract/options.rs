//! Extraction options and configuration.

use crate::model::{DEFAULT_OCCUPATION, DEFAULT_PHOTO_URL};

/// Which extraction strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// Try JSON first; fall through to labeled blocks when the input is
    /// not valid JSON. JSON parse failure is a mode-selection signal,
    /// not an error.
    #[default]
    Auto,
    /// Treat the whole input as a JSON object or array of objects.
    Json,
    /// Split on blank lines and scan each block for label prefixes.
    LabeledBlocks,
    /// One combined pattern over the whitespace-collapsed document.
    /// For exported OCR text where records run back-to-back without
    /// blank-line separators; never entered as a fallback.
    OcrPattern,
}

/// Options for record extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Extraction strategy.
    pub mode: ExtractMode,

    /// Occupation substituted when a record carries none.
    pub default_occupation: String,

    /// Photo URL substituted when a record carries none.
    pub default_photo_url: String,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extraction mode.
    pub fn with_mode(mut self, mode: ExtractMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use the single-pattern OCR strategy.
    pub fn ocr(mut self) -> Self {
        self.mode = ExtractMode::OcrPattern;
        self
    }

    /// Use labeled-block parsing without the JSON attempt.
    pub fn labeled(mut self) -> Self {
        self.mode = ExtractMode::LabeledBlocks;
        self
    }

    /// Override the default occupation placeholder.
    pub fn with_default_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.default_occupation = occupation.into();
        self
    }

    /// Override the default photo URL placeholder.
    pub fn with_default_photo_url(mut self, url: impl Into<String>) -> Self {
        self.default_photo_url = url.into();
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mode: ExtractMode::Auto,
            default_occupation: DEFAULT_OCCUPATION.to_string(),
            default_photo_url: DEFAULT_PHOTO_URL.to_string(),
        }
    }
}
