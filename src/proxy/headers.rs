//! Header normalization.
//!
//! Turns the editable header rows into the map handed to the transport.
//! Header names are not validated here; an illegal name surfaces later as a
//! failure to build the request.

use super::types::HeaderEntry;
use std::collections::HashMap;

/// Collects header rows into a map, skipping rows whose key is blank.
///
/// Rows are applied in order, so a repeated key keeps its last value.
pub fn normalize_headers(entries: &[HeaderEntry]) -> HashMap<String, String> {
    let mut headers = HashMap::with_capacity(entries.len());
    for entry in entries {
        if entry.key.trim().is_empty() {
            continue;
        }
        headers.insert(entry.key.clone(), entry.value.clone());
    }
    headers
}
