//! Glyph repair: legacy-font artifact substitution and contextual rewrites.

mod charmap;
mod digits;
mod engine;

pub use charmap::{is_artifact, substitution, ARTIFACT_MAP};
pub use digits::normalize_digits;
pub use engine::GlyphRepair;
