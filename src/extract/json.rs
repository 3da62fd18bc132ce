//! Structured JSON extraction mode.

use serde_json::Value;

use super::RawFields;

/// Try to read the whole input as JSON.
///
/// Accepts a single record object or an array of record objects; any
/// other shape, or a parse failure, returns `None` so the caller can fall
/// through to labeled-block parsing. Array elements that are not objects
/// are skipped rather than failing the batch.
pub(crate) fn parse(text: &str) -> Option<Vec<RawFields>> {
    let value: Value = serde_json::from_str(text).ok()?;
    match value {
        Value::Object(_) => {
            let fields = serde_json::from_value::<RawFields>(value).ok()?;
            Some(vec![fields])
        }
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value::<RawFields>(item).ok())
                .collect(),
        ),
        _ => None,
    }
}
