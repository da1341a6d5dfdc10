//! JSON rendering of result payloads.

use crate::error::CidrError;
use serde::Serialize;

/// Pretty-printed JSON for any result payload.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// JSON body for a failed calculation: `{"error": <kind>, "detail": <message>}`.
pub fn error_to_json(err: &CidrError) -> String {
    serde_json::json!({
        "error": err.kind(),
        "detail": err.to_string(),
    })
    .to_string()
}
