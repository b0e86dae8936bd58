//! Response body decoding
//!
//! Text-generation endpoints disagree on the body they return. Accepted:
//!
//! | Shape | Example |
//! |-------|---------|
//! | List of objects | `[{"generated_text": "..."}]` |
//! | Single object | `{"generated_text": "..."}` |
//! | JSON string | `"..."` |
//! | Plain text | `...` (non-JSON body) |
//!
//! An `{"error": ...}` object is an inference error, not a shape problem.

use magi_application::GatewayError;
use serde_json::Value;

const TEXT_FIELD: &str = "generated_text";
const ERROR_FIELD: &str = "error";

/// Longest body excerpt carried in an error message
const MAX_EXCERPT: usize = 200;

/// Decode a successful response body into generated text.
///
/// `content_type` decides how a body that is not valid JSON is treated:
/// declared JSON is malformed, anything else is taken as raw text.
pub fn decode_body(body: &str, content_type: Option<&str>) -> Result<String, GatewayError> {
    let declared_json = content_type.is_some_and(|ct| ct.contains("json"));

    match serde_json::from_str::<Value>(body) {
        Ok(value) => extract_generated_text(&value),
        Err(e) if declared_json => Err(GatewayError::MalformedBody(e.to_string())),
        Err(_) if body.trim().is_empty() => Err(GatewayError::MalformedBody(
            "empty response body".to_string(),
        )),
        Err(_) => Ok(body.to_string()),
    }
}

/// Pull the generated text out of a parsed JSON body
pub fn extract_generated_text(value: &Value) -> Result<String, GatewayError> {
    if let Some(message) = error_message(value) {
        return Err(GatewayError::Api(message));
    }

    let text = match value {
        Value::Array(items) => items
            .first()
            .and_then(|item| item.get(TEXT_FIELD))
            .and_then(Value::as_str),
        Value::Object(map) => map.get(TEXT_FIELD).and_then(Value::as_str),
        Value::String(s) => Some(s.as_str()),
        _ => None,
    };

    text.map(str::to_string)
        .ok_or_else(|| GatewayError::UnrecognizedResponseShape(excerpt(&value.to_string())))
}

/// The `error` field of an error object, if the body is one
pub fn error_message(value: &Value) -> Option<String> {
    let error = value.as_object()?.get(ERROR_FIELD)?;
    Some(match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Shorten a body for inclusion in an error message
pub fn excerpt(body: &str) -> String {
    let body = body.trim();
    if body.len() <= MAX_EXCERPT {
        return body.to_string();
    }
    let mut end = MAX_EXCERPT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
