//! Raw response payload handling.
//!
//! The API reports success and failure alike as a JSON object, with
//! failures distinguished only by an `Error` key. Payloads are returned
//! to callers verbatim so unknown future fields survive; this module
//! provides the `Error`-key probe callers would otherwise hand-roll.

use serde_json::{Map, Value};

/// Decoded JSON body of a SimilarWeb response.
///
/// Returned to the caller exactly as decoded: no schema validation, no
/// field filtering.
pub type SitePayload = Map<String, Value>;

/// Extract the API error message from a payload, if present.
///
/// Known messages include `user_key_invalid`, `Malformed or Unknown URL`,
/// per-field rejections like `The value '14-2014' is not valid for Start.`,
/// and `Unknown Error` for the empty-response case.
///
/// # Example
///
/// ```
/// use similarweb::error_message;
///
/// let payload = serde_json::json!({"Error": "user_key_invalid"});
/// let payload = payload.as_object().unwrap();
/// assert_eq!(error_message(payload), Some("user_key_invalid"));
/// ```
pub fn error_message(payload: &SitePayload) -> Option<&str> {
    payload.get("Error").and_then(Value::as_str)
}
