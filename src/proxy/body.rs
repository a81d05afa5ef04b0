//! Request body resolution.
//!
//! Decides what, if anything, goes on the wire for a given method and the raw
//! editor text. Text that is not valid JSON is sent as-is; resolution never
//! fails.

use super::types::{HttpMethod, RequestBody};

pub fn resolve_body(method: HttpMethod, raw: &str) -> RequestBody {
    if !method.transmits_body() || raw.trim().is_empty() {
        return RequestBody::Absent;
    }

    match serde_json::from_str(raw) {
        Ok(value) => RequestBody::Json(value),
        Err(e) => {
            tracing::debug!(error = %e, "Body is not JSON, sending raw text");
            RequestBody::Text(raw.to_string())
        }
    }
}
