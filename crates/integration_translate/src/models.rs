//! Response parsing for the `translate_a/single` endpoint
//!
//! The endpoint answers with positional JSON arrays rather than objects:
//! `[[["translated", "source", ...], ...], null, "detected-language", ...]`.

use serde_json::Value;

/// A translated chunk and the language the backend detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub detected_source: Option<String>,
}

/// Parse the positional response; `None` if the shape is unexpected
pub(crate) fn parse_response(value: &Value) -> Option<Translation> {
    let segments = value.get(0)?.as_array()?;
    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();
    let detected_source = value.get(2).and_then(Value::as_str).map(str::to_string);

    Some(Translation {
        text,
        detected_source,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn joins_segments_in_order() {
        let value = json!([
            [["Bonjour le monde. ", "Hello world. ", null, null, 10], ["Au revoir.", "Goodbye.", null, null, 10]],
            null,
            "en"
        ]);
        let translation = parse_response(&value).unwrap();
        assert_eq!(translation.text, "Bonjour le monde. Au revoir.");
        assert_eq!(translation.detected_source.as_deref(), Some("en"));
    }

    #[test]
    fn unexpected_shape_is_none() {
        assert!(parse_response(&json!({"error": "nope"})).is_none());
        assert!(parse_response(&json!([null])).is_none());
    }

    #[test]
    fn missing_detected_language_is_tolerated() {
        let translation = parse_response(&json!([[["Hola", "Hi"]]])).unwrap();
        assert_eq!(translation.text, "Hola");
        assert!(translation.detected_source.is_none());
    }
}
