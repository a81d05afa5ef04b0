use axum::{extract::State, Json};

use super::extract::ApiJson;
use super::AppState;
use crate::error::AppError;
use crate::suggest::{SuggestionError, SuggestionRequest, SuggestionResponse};

/// Asks the AI collaborator how to fix a failed request.
pub async fn get_suggestion(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    match request.response_status {
        Some(status) if status >= 400 => {}
        _ => {
            return Err(AppError::Validation(
                "AI suggestions are only available for responses with status 400 or above"
                    .to_string(),
            ))
        }
    }

    let service = state
        .suggester
        .as_ref()
        .ok_or(SuggestionError::NotConfigured)?;

    let suggestion = service.suggest(&request).await?;
    Ok(Json(SuggestionResponse { suggestion }))
}
