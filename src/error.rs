use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::proxy::UnknownMethod;
use crate::store::StoreError;
use crate::suggest::SuggestionError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
            StoreError::NotOwner(_) => AppError::Unauthorized(err.to_string()),
            StoreError::Invalid(message) => AppError::Validation(message),
        }
    }
}

impl From<UnknownMethod> for AppError {
    fn from(err: UnknownMethod) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": self.to_string() }),
            ),
            AppError::Unauthorized(_) => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "error": self.to_string() }),
            ),
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "error": self.to_string() }),
            ),
            AppError::Suggestion(e) => {
                tracing::error!(error = %e, "AI suggestion failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to get AI suggestion", "details": e.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
