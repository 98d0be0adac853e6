//! JSON text encoding for `.cki` documents

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::io::Write;

/// Indentation used by Cirklon's own instrument files
const INDENT: &[u8] = b"    ";

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Four-space indented
    #[default]
    Pretty,
    Compact,
}

/// Recursively order object keys lexically
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Write a document as JSON text to `writer`
pub fn write_document<W: Write>(writer: W, value: &Value, style: JsonStyle) -> Result<()> {
    match style {
        JsonStyle::Compact => serde_json::to_writer(writer, value)?,
        JsonStyle::Pretty => {
            let mut serializer =
                Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
            value.serialize(&mut serializer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: &Value, style: JsonStyle) -> String {
        let mut out = Vec::new();
        write_document(&mut out, value, style).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_sort_keys_is_lexical() {
        let value = json!({"slot_2": 2, "slot_10": 10, "slot_1": {"b": 1, "a": 0}});
        let sorted = sort_keys(value);
        let keys: Vec<&str> = sorted.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["slot_1", "slot_10", "slot_2"]);

        let inner: Vec<&str> = sorted["slot_1"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(inner, vec!["a", "b"]);
    }

    #[test]
    fn test_pretty_uses_four_spaces() {
        let text = encode(&json!({"a": {"b": 1}}), JsonStyle::Pretty);
        assert_eq!(text, "{\n    \"a\": {\n        \"b\": 1\n    }\n}");
    }

    #[test]
    fn test_compact() {
        let text = encode(&json!({"a": [1, 2]}), JsonStyle::Compact);
        assert_eq!(text, r#"{"a":[1,2]}"#);
    }
}
