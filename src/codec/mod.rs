//! JSON payload decoding into domain models
//!
//! Decoders are pure: given the same body text they produce the same model
//! or the same [`DecodeError`]. Field policy lives here and nowhere else —
//! `license`, `parent`, `language`, and `topics` have defined defaults,
//! every other field is required.

mod release;
mod repository;

use crate::error::DecodeError;

/// A domain model decodable from a GitHub API response body.
pub trait DecodableModel: Sized {
    fn decode(json: &str) -> Result<Self, DecodeError>;
}

/// Parses the body, rejecting payloads that carry the API's top-level
/// `message` field. The API uses it to signal a missing resource regardless
/// of the status code.
fn parse_checked(json: &str) -> Result<serde_json::Value, DecodeError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| DecodeError::MalformedPayload(e.to_string()))?;
    if value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .is_some()
    {
        return Err(DecodeError::NotFound);
    }
    Ok(value)
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), DecodeError> {
    if value.is_empty() {
        return Err(DecodeError::MalformedPayload(format!(
            "empty required field: {}",
            field
        )));
    }
    Ok(())
}
