//! Response normalization over heterogeneous LLM payloads.
//!
//! Hosted client libraries disagree on response shape: some return a bare
//! string, some a message object with a `content` field, some a dict with
//! `generated_text` or `text`, some a list of candidates. `extract_text`
//! accepts any of them, never panics, and falls back to the stringified
//! value for unrecognized shapes. Empty output means "answer unavailable";
//! the engine substitutes the apology text.

use serde_json::Value;

/// Extracts plain answer text from a raw LLM response value.
pub fn extract_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => match items.first() {
            Some(first) => extract_text(first),
            None => value.to_string(),
        },
        Value::Object(map) => {
            if let Some(text) = candidate_text(value) {
                return text;
            }
            if let Some(content) = map.get("content") {
                return value_to_text(content);
            }
            if let Some(generated) = map.get("generated_text") {
                return value_to_text(generated);
            }
            if let Some(text) = map.get("text") {
                return value_to_text(text);
            }
            serde_json::to_string(value).unwrap_or_default()
        }
        other => other.to_string(),
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => extract_text(other),
    }
}

/// Gemini `generateContent` shape: `candidates[0].content.parts[*].text`.
fn candidate_text(value: &Value) -> Option<String> {
    let parts = value
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("");

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_string_passes_through() {
        assert_eq!(extract_text(&json!("คำตอบ")), "คำตอบ");
    }

    #[test]
    fn content_object_is_unwrapped() {
        assert_eq!(
            extract_text(&json!({ "content": "the answer" })),
            "the answer"
        );
    }

    #[test]
    fn generated_text_key_is_used() {
        assert_eq!(
            extract_text(&json!({ "generated_text": "gen" })),
            "gen"
        );
    }

    #[test]
    fn text_key_is_used() {
        assert_eq!(extract_text(&json!({ "text": "plain" })), "plain");
    }

    #[test]
    fn list_takes_first_element() {
        assert_eq!(
            extract_text(&json!([{ "generated_text": "first" }, "second"])),
            "first"
        );
    }

    #[test]
    fn gemini_candidates_are_joined() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello " }, { "text": "world" }], "role": "model" },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(extract_text(&payload), "Hello world");
    }

    #[test]
    fn unrecognized_shape_falls_back_to_string_form() {
        assert_eq!(extract_text(&json!(42)), "42");
        assert_eq!(extract_text(&json!(true)), "true");
        assert_eq!(
            extract_text(&json!({ "unknown": 1 })),
            "{\"unknown\":1}"
        );
    }

    #[test]
    fn null_yields_empty() {
        assert_eq!(extract_text(&Value::Null), "");
    }

    #[test]
    fn empty_list_stringifies_like_any_unrecognized_shape() {
        assert_eq!(extract_text(&json!([])), "[]");
    }
}
