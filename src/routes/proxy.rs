use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::extract::ApiJson;
use super::AppState;
use crate::error::AppError;
use crate::proxy::{ExecuteRequest, ExecuteResponse, HttpMethod, RequestExecutorExt};

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Executes a request on behalf of the browser.
///
/// A reply of any status is a 200 with the normalized result; a request that
/// got no reply or could not be sent is a 500 with the normalized failure.
pub async fn execute_request(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ExecuteRequest>,
) -> Result<Response, AppError> {
    let (url, method) = match (non_blank(&request.url), non_blank(&request.method)) {
        (Some(url), Some(method)) => (url, method),
        _ => {
            return Err(AppError::Validation(
                "Please provide a URL and method".to_string(),
            ))
        }
    };

    if url::Url::parse(url).is_err() {
        return Err(AppError::Validation("Please enter a valid URL".to_string()));
    }
    let method: HttpMethod = method.parse()?;

    tracing::debug!(%method, url, "Executing request");

    let outcome = state
        .executor
        .execute_input(url, method, &request.headers, &request.body)
        .await;

    let response = match outcome.into_result() {
        Ok(result) => {
            tracing::debug!(status = result.status, is_error = result.is_error, "Request settled");
            (StatusCode::OK, Json(ExecuteResponse::success(result))).into_response()
        }
        Err(failure) => {
            tracing::warn!(
                message = %failure.message,
                had_request = failure.had_request,
                "Request failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExecuteResponse::failure(failure)),
            )
                .into_response()
        }
    };
    Ok(response)
}
