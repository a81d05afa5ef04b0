use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{collections::HashMap, fmt, str::FromStr};
use thiserror::Error;

/// Message carried by every failure where the request left but nothing came back.
pub const NO_RESPONSE_MESSAGE: &str = "No response received from server";

/// HTTP methods the tester can issue and store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// GET and DELETE never carry a body, whatever the caller typed.
    pub fn transmits_body(&self) -> bool {
        !matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Options => reqwest::Method::OPTIONS,
        }
    }
}

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == upper)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One editable header row. Keys need not be unique and may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub key: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Body as it will be put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Absent,
    Json(Value),
    Text(String),
}

/// Fully resolved description of one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: RequestBody,
}

/// Incoming execute request from the frontend.
#[derive(Debug, Default, Deserialize)]
pub struct ExecuteRequest {
    pub url: Option<String>,
    pub method: Option<String>,
    /// Anything other than an array of rows is treated as no headers.
    #[serde(default, deserialize_with = "deserialize_header_rows")]
    pub headers: Vec<HeaderEntry>,
    /// Raw editor text. Non-string JSON values are kept as their JSON text.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub body: String,
}

/// Null becomes empty text; other non-string values become their JSON text.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn deserialize_header_rows<'de, D>(deserializer: D) -> Result<Vec<HeaderEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = match Value::deserialize(deserializer)? {
        Value::Array(rows) => rows,
        _ => return Ok(Vec::new()),
    };
    Ok(rows
        .into_iter()
        .filter_map(|row| HeaderEntry::deserialize(row).ok())
        .collect())
}

/// A call that received a reply, whatever its status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub data: Value,
    pub status: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

/// A call that got no reply, or never left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionFailure {
    pub message: String,
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    pub had_request: bool,
}

impl ExecutionFailure {
    pub fn no_reply(duration_ms: u64) -> Self {
        Self {
            message: NO_RESPONSE_MESSAGE.to_string(),
            duration_ms,
            had_request: true,
        }
    }

    pub fn not_sent(message: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            message: message.into(),
            duration_ms,
            had_request: false,
        }
    }
}

/// Envelope returned by the execute route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ExecutionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub had_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl ExecuteResponse {
    pub fn success(data: ExecutionResult) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            had_request: None,
            duration: None,
        }
    }

    pub fn failure(failure: ExecutionFailure) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(failure.message),
            had_request: Some(failure.had_request),
            duration: Some(failure.duration_ms),
        }
    }
}
