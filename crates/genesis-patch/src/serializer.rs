//! Canonical JSON rendering
//!
//! Object keys are sorted at every nesting level in both compact and pretty
//! form, so two renderings of the same document differ only in whitespace.
//! The key order is enforced here rather than relying on how `serde_json`
//! happens to store maps.

use serde_json::{Map, Value};

use crate::domain::PatchDocument;
use crate::error::PatchError;

/// Render a document as canonical JSON.
///
/// - `pretty = false`: one line, `,` and `:` separators
/// - `pretty = true`: 2-space indentation
///
/// No trailing newline is added.
pub fn serialize(doc: &PatchDocument, pretty: bool) -> Result<String, PatchError> {
    let value = canonicalize(serde_json::to_value(doc)?);
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Decode a rendered patch.
pub fn parse(text: &str) -> Result<PatchDocument, PatchError> {
    Ok(serde_json::from_str(text)?)
}

/// Rebuild every object with lexicographically sorted keys.
pub fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, canonicalize(value)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
