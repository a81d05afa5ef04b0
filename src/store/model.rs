use crate::proxy::{HeaderEntry, HttpMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoreError;

pub const MAX_NAME_LEN: usize = 100;

/// A request definition saved by a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRequest {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<HeaderEntry>,
    pub body: String,
    pub user: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a saved request, as submitted for create or update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestDraft {
    pub name: Option<String>,
    pub url: Option<String>,
    pub method: Option<HttpMethod>,
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
    #[serde(default)]
    pub body: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<HeaderEntry>,
    pub body: String,
}

impl RequestDraft {
    pub fn validate(self) -> Result<ValidDraft, StoreError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(StoreError::Invalid("Please add a request name".to_string()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(StoreError::Invalid(format!(
                "Name cannot be more than {} characters",
                MAX_NAME_LEN
            )));
        }

        let url = self.url.as_deref().map(str::trim).unwrap_or_default();
        if url.is_empty() {
            return Err(StoreError::Invalid("Please add a URL".to_string()));
        }

        let method = self
            .method
            .ok_or_else(|| StoreError::Invalid("Please add a HTTP method".to_string()))?;

        Ok(ValidDraft {
            name: name.to_string(),
            url: url.to_string(),
            method,
            headers: self.headers,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(value: serde_json::Value) -> RequestDraft {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_draft_is_trimmed_and_defaulted() {
        let valid = draft(json!({
            "name": "  Users  ",
            "url": " https://api.example.com/users ",
            "method": "GET"
        }))
        .validate()
        .unwrap();
        assert_eq!(valid.name, "Users");
        assert_eq!(valid.url, "https://api.example.com/users");
        assert_eq!(valid.method, HttpMethod::Get);
        assert!(valid.headers.is_empty());
        assert_eq!(valid.body, "");
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let err = draft(json!({"url": "u", "method": "GET"})).validate().unwrap_err();
        assert_eq!(err, StoreError::Invalid("Please add a request name".to_string()));

        let err = draft(json!({"name": "n", "url": "   ", "method": "GET"}))
            .validate()
            .unwrap_err();
        assert_eq!(err, StoreError::Invalid("Please add a URL".to_string()));

        let err = draft(json!({"name": "n", "url": "u"})).validate().unwrap_err();
        assert_eq!(err, StoreError::Invalid("Please add a HTTP method".to_string()));
    }

    #[test]
    fn test_name_length_limit() {
        let ok = draft(json!({"name": "a".repeat(100), "url": "u", "method": "POST"}));
        assert!(ok.validate().is_ok());

        let long = draft(json!({"name": "a".repeat(101), "url": "u", "method": "POST"}));
        assert_eq!(
            long.validate().unwrap_err().to_string(),
            "Name cannot be more than 100 characters"
        );
    }

    #[test]
    fn test_unknown_method_does_not_deserialize() {
        let result: Result<RequestDraft, _> =
            serde_json::from_value(json!({"name": "n", "url": "u", "method": "TRACE"}));
        assert!(result.is_err());
    }
}
