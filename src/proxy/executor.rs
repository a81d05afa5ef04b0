//! HTTP request execution.
//!
//! Issues exactly one outbound call per invocation with a fixed timeout and
//! measures it end to end. There is no retry; redirects follow the transport
//! default.

use super::body::resolve_body;
use super::headers::normalize_headers;
use super::outcome::{normalize, Outcome, Reply, Settlement};
use super::types::*;
use crate::shared::Stopwatch;
use reqwest::{header::HeaderMap, Client};
use std::{collections::HashMap, time::Duration};

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30000;

/// Prepares a `RequestSpec` from raw editor input.
pub fn prepare_spec(
    url: &str,
    method: HttpMethod,
    headers: &[HeaderEntry],
    raw_body: &str,
) -> RequestSpec {
    RequestSpec {
        url: url.to_string(),
        method,
        headers: normalize_headers(headers),
        body: resolve_body(method, raw_body),
    }
}

/// Executes requests over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
    timeout: Duration,
}

impl HttpExecutor {
    /// Creates an executor with the default 30 second timeout.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Performs the call described by `spec` and normalizes how it settled.
    pub async fn execute(&self, spec: RequestSpec) -> Outcome {
        let method = spec.method;
        let url = spec.url.clone();

        let watch = Stopwatch::start();
        let settlement = self.dispatch(spec).await;
        let duration_ms = watch.elapsed_ms();

        let outcome = normalize(settlement, duration_ms);
        match &outcome {
            Outcome::Responded(result) => tracing::debug!(
                %method,
                %url,
                status = result.status,
                duration_ms,
                "Remote responded"
            ),
            Outcome::NoReply { .. } => {
                tracing::warn!(%method, %url, duration_ms, "No response received")
            }
            Outcome::NotSent { message, .. } => {
                tracing::warn!(%method, %url, duration_ms, error = %message, "Request not sent")
            }
        }
        outcome
    }

    async fn dispatch(&self, spec: RequestSpec) -> Settlement {
        let mut builder = self.client.request(spec.method.to_reqwest(), spec.url.as_str());

        for (key, value) in &spec.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        builder = match spec.body {
            RequestBody::Absent => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Text(text) => builder.body(text),
        };

        let response = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(error = %e, timeout = e.is_timeout(), "Transport error");
                return Settlement::from_transport_error(&e);
            }
        };

        let status = response.status();
        let headers = collect_headers(response.headers());

        // Headers are in hand, so this is a reply even if the body is lost.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read response body");
                Vec::new()
            }
        };

        Settlement::Replied(Reply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}

/// Flattens response headers, joining repeated names with ", ".
pub fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::with_capacity(headers.len());
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    collected
}
