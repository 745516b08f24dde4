//! Typed view of the visits payload.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::Result;
use crate::response::SitePayload;

/// Interpret a raw [`crate::TrafficClient::visits`] payload as a map of
/// `YYYY-MM-DD` date strings to visit counts, ordered by date.
///
/// # Errors
///
/// Returns a parse error if any value is not an integer count, including
/// when the payload is an `{"Error": ...}` payload.
pub fn visit_counts(payload: &SitePayload) -> Result<BTreeMap<String, u64>> {
    let counts = serde_json::from_value(Value::Object(payload.clone()))?;
    Ok(counts)
}
