//! Turning the model's reply text into entries.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::GeminiError;
use crate::models::TimeEntry;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[A-Za-z]*").expect("fence regex is valid"));

/// Remove markdown code-fence markers the model may still wrap its JSON in
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Parse the model's reply into entries
///
/// The text must be a JSON array of `{start, end, description, projectId}`
/// objects, optionally fenced. Nothing is validated beyond the shape.
pub fn parse_entries(text: &str) -> Result<Vec<TimeEntry>, GeminiError> {
    let cleaned = strip_code_fences(text);
    debug!("Cleaned model output: {}", cleaned);

    serde_json::from_str(&cleaned).map_err(|e| GeminiError::InvalidJson {
        message: e.to_string(),
        raw: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fence() {
        let text = "```json\n[{\"a\":1}]\n```";
        assert_eq!(strip_code_fences(text), "[{\"a\":1}]");
    }

    #[test]
    fn test_strip_plain_fence() {
        assert_eq!(strip_code_fences("```\n[]\n```\n"), "[]");
    }

    #[test]
    fn test_unfenced_text_is_trimmed_only() {
        assert_eq!(strip_code_fences("  [1, 2]\n"), "[1, 2]");
    }

    #[test]
    fn test_parse_entries() {
        let text = r#"```json
[
  {"start": "10:00", "end": "12:00", "description": "Meeting", "projectId": "p-1"},
  {"start": "12:00", "end": "15:00", "description": "Development", "projectId": null}
]
```"#;
        let entries = parse_entries(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "Meeting");
        assert_eq!(entries[0].project_id.as_deref(), Some("p-1"));
        assert_eq!(entries[1].start, "12:00");
        assert!(entries[1].project_id.is_none());
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_entries("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_prose_fails_with_raw_text() {
        let text = "I could not understand your day.";
        match parse_entries(text) {
            Err(GeminiError::InvalidJson { raw, .. }) => assert_eq!(raw, text),
            other => panic!("Expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_shape_fails() {
        let text = r#"{"start": "10:00", "end": "12:00", "description": "Meeting"}"#;
        assert!(matches!(
            parse_entries(text),
            Err(GeminiError::InvalidJson { .. })
        ));
    }
}
