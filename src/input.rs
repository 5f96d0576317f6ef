//! Normalization of the embeddings `input` field.

use log::trace;

use crate::payload::{PayloadShape, RawPayload};

/// Reduces an `input` payload to the list of strings it carries.
///
/// A string becomes a one-element list; for an array, string elements are kept
/// in order and everything else is dropped. Absent, `null` and any other shape
/// yield an empty list.
pub fn parse_input(payload: &RawPayload) -> Vec<String> {
    if payload.is_nil() {
        return Vec::new();
    }
    match payload.shape() {
        PayloadShape::Scalar(text) => vec![text],
        PayloadShape::Sequence(items) => items
            .into_iter()
            .filter_map(|item| {
                let text = serde_json::from_str::<String>(item.get()).ok();
                if text.is_none() {
                    trace!("Dropping non-string input element: {}", item.get());
                }
                text
            })
            .collect(),
        PayloadShape::Unrecognized => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nil_input() {
        assert!(parse_input(&RawPayload::nil()).is_empty());
        assert!(parse_input(&RawPayload::from(json!(null))).is_empty());
    }

    #[test]
    fn test_string_input() {
        assert_eq!(parse_input(&RawPayload::from(json!("hi"))), vec!["hi"]);
    }

    #[test]
    fn test_mixed_sequence_keeps_strings_in_order() {
        let payload = RawPayload::from(json!(["a", 3, "b", null, ["c"], {"d": 1}, ""]));
        assert_eq!(parse_input(&payload), vec!["a", "b", ""]);
    }

    #[test]
    fn test_other_shapes_are_empty() {
        assert!(parse_input(&RawPayload::from(json!(42))).is_empty());
        assert!(parse_input(&RawPayload::from(json!({"input": "x"}))).is_empty());
        assert!(parse_input(&RawPayload::from_bytes(b"[\"a\",".to_vec())).is_empty());
    }

    #[test]
    fn test_token_arrays_are_dropped() {
        // Pre-tokenized inputs are not strings and are not supported here.
        let payload = RawPayload::from(json!([[1, 2, 3], [4, 5]]));
        assert!(parse_input(&payload).is_empty());
    }
}
