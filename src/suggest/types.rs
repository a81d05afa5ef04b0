use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A failed request and the reply it got, as sent by the frontend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub headers: Option<Value>,
    #[serde(default)]
    pub body: Option<Value>,
    pub response_status: Option<u16>,
    #[serde(default)]
    pub response_data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("GEMINI_API_KEY is not configured")]
    NotConfigured,

    #[error("AI request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("AI service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("No response from AI model")]
    Empty,
}
