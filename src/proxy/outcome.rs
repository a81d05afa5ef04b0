//! Outcome normalization.
//!
//! An execution settles in exactly one of three ways: the remote replied
//! (with any status), the request left but nothing came back, or the request
//! could not be sent at all. A reply always wins; 4xx and 5xx statuses are
//! ordinary results flagged with `is_error`, never failures.

use super::types::{ExecutionFailure, ExecutionResult};
use base64::Engine;
use serde_json::Value;
use std::collections::HashMap;

/// Raw reply captured from the transport before normalization.
#[derive(Debug, Clone, Default)]
pub struct Reply {
    pub status: u16,
    pub status_text: String,
    /// Lower-case header names.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// How the transport settled.
#[derive(Debug)]
pub enum Settlement {
    Replied(Reply),
    /// The request was dispatched but no reply arrived (timeout, refused, reset).
    NoReply,
    /// The request could not be built or dispatched.
    NotSent(String),
}

impl Settlement {
    /// Classifies a transport error raised before any reply was received.
    pub fn from_transport_error(error: &reqwest::Error) -> Self {
        if error.is_builder() {
            Settlement::NotSent(error.to_string())
        } else {
            Settlement::NoReply
        }
    }
}

/// Normalized outcome of one execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Responded(ExecutionResult),
    NoReply { duration_ms: u64 },
    NotSent { message: String, duration_ms: u64 },
}

impl Outcome {
    pub fn duration_ms(&self) -> u64 {
        match self {
            Outcome::Responded(result) => result.duration_ms,
            Outcome::NoReply { duration_ms } | Outcome::NotSent { duration_ms, .. } => *duration_ms,
        }
    }

    /// Splits the outcome into what callers render as data and what they
    /// render as a failure.
    pub fn into_result(self) -> Result<ExecutionResult, ExecutionFailure> {
        match self {
            Outcome::Responded(result) => Ok(result),
            Outcome::NoReply { duration_ms } => Err(ExecutionFailure::no_reply(duration_ms)),
            Outcome::NotSent {
                message,
                duration_ms,
            } => Err(ExecutionFailure::not_sent(message, duration_ms)),
        }
    }
}

/// Maps a settlement and its measured duration to an `Outcome`.
pub fn normalize(settlement: Settlement, duration_ms: u64) -> Outcome {
    match settlement {
        Settlement::Replied(reply) => {
            let data = decode_body(reply.headers.get("content-type").map(String::as_str), &reply.body);
            Outcome::Responded(ExecutionResult {
                data,
                status: reply.status,
                status_text: reply.status_text,
                headers: reply.headers,
                duration_ms,
                is_error: reply.status >= 400,
            })
        }
        Settlement::NoReply => Outcome::NoReply { duration_ms },
        Settlement::NotSent(message) => Outcome::NotSent {
            message,
            duration_ms,
        },
    }
}

/// Determines if a response body is likely binary based on its content type.
pub fn is_binary_content(content_type: Option<&str>) -> bool {
    let ct = match content_type {
        Some(ct) => ct.to_lowercase(),
        None => return false,
    };

    let text_types = [
        "text/",
        "application/json",
        "application/xml",
        "application/javascript",
        "application/x-javascript",
        "application/ecmascript",
        "application/x-www-form-urlencoded",
        "+json",
        "+xml",
    ];

    !text_types.iter().any(|t| ct.contains(t))
}

/// Turns response bytes into displayable data: parsed JSON when possible,
/// base64 for binary payloads, text otherwise.
pub fn decode_body(content_type: Option<&str>, body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::String(String::new());
    }
    if is_binary_content(content_type) {
        return Value::String(base64::engine::general_purpose::STANDARD.encode(body));
    }
    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => Value::String(String::from_utf8_lossy(body).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::types::NO_RESPONSE_MESSAGE;
    use serde_json::json;

    fn reply(status: u16, content_type: &str, body: &str) -> Reply {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), content_type.to_string());
        Reply {
            status,
            status_text: String::new(),
            headers,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_is_binary_content() {
        assert!(!is_binary_content(Some("text/html")));
        assert!(!is_binary_content(Some("application/json")));
        assert!(!is_binary_content(Some("application/problem+json")));
        assert!(!is_binary_content(Some("text/plain; charset=utf-8")));
        assert!(is_binary_content(Some("image/png")));
        assert!(is_binary_content(Some("application/octet-stream")));
        assert!(!is_binary_content(None));
    }

    #[test]
    fn test_decode_body_variants() {
        assert_eq!(decode_body(Some("application/json"), br#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(decode_body(Some("text/plain"), b"hello"), json!("hello"));
        assert_eq!(decode_body(None, b""), json!(""));
        assert_eq!(decode_body(Some("image/png"), &[0x89, 0x50]), json!("iVA="));
        // JSON is recognised even when the server mislabels it.
        assert_eq!(decode_body(Some("text/plain"), b"[1,2]"), json!([1, 2]));
    }

    #[test]
    fn test_error_status_is_a_result() {
        let mut r = reply(404, "application/json", r#"{"message":"missing"}"#);
        r.status_text = "Not Found".to_string();
        let outcome = normalize(Settlement::Replied(r), 15);
        let result = outcome.into_result().unwrap();
        assert!(result.is_error);
        assert_eq!(result.status, 404);
        assert_eq!(result.status_text, "Not Found");
        assert_eq!(result.data, json!({"message": "missing"}));
        assert_eq!(result.duration_ms, 15);
    }

    #[test]
    fn test_success_status_is_not_error() {
        for status in [200, 201, 204, 301, 399] {
            let outcome = normalize(Settlement::Replied(reply(status, "text/plain", "ok")), 1);
            assert!(!outcome.into_result().unwrap().is_error, "status {}", status);
        }
        let outcome = normalize(Settlement::Replied(reply(500, "text/plain", "boom")), 1);
        assert!(outcome.into_result().unwrap().is_error);
    }

    #[test]
    fn test_headers_copied_verbatim() {
        let mut r = reply(200, "text/plain", "ok");
        r.headers.insert("x-request-id".to_string(), "abc".to_string());
        let result = normalize(Settlement::Replied(r), 0).into_result().unwrap();
        assert_eq!(result.headers["x-request-id"], "abc");
        assert_eq!(result.headers["content-type"], "text/plain");
    }

    #[test]
    fn test_no_reply_failure() {
        let outcome = normalize(Settlement::NoReply, 30_000);
        assert_eq!(outcome.duration_ms(), 30_000);
        let failure = outcome.into_result().unwrap_err();
        assert_eq!(failure.message, NO_RESPONSE_MESSAGE);
        assert!(failure.had_request);
        assert_eq!(failure.duration_ms, 30_000);
    }

    #[test]
    fn test_not_sent_failure_keeps_message() {
        let outcome = normalize(Settlement::NotSent("builder error".to_string()), 3);
        let failure = outcome.into_result().unwrap_err();
        assert_eq!(failure.message, "builder error");
        assert!(!failure.had_request);
        assert_eq!(failure.duration_ms, 3);
    }

    #[test]
    fn test_duration_recorded_for_every_outcome() {
        let outcomes = [
            normalize(Settlement::Replied(reply(500, "text/plain", "x")), 7),
            normalize(Settlement::NoReply, 7),
            normalize(Settlement::NotSent("bad".to_string()), 7),
        ];
        assert!(outcomes.iter().all(|o| o.duration_ms() == 7));
    }
}
