//! Saved request CRUD, scoped to the calling identity.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use super::extract::ApiJson;
use super::AppState;
use crate::error::AppError;
use crate::store::{RequestDraft, StoreError};

/// Header carrying the authenticated user id, set by the auth layer in front.
pub const USER_ID_HEADER: &str = "x-user-id";

fn owner(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Unauthorized("Not authorized to access this route".to_string()))
}

fn record_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::from(StoreError::NotFound(Uuid::nil())))
}

pub async fn save_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(draft): ApiJson<RequestDraft>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let owner = owner(&headers)?;
    let record = state.store.create(&owner, draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": record })),
    ))
}

pub async fn list_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let owner = owner(&headers)?;
    let records = state.store.list(&owner).await;
    Ok(Json(json!({
        "success": true,
        "count": records.len(),
        "data": records,
    })))
}

pub async fn get_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let owner = owner(&headers)?;
    let record = state.store.get(&owner, record_id(&id)?).await?;
    Ok(Json(json!({ "success": true, "data": record })))
}

pub async fn update_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ApiJson(draft): ApiJson<RequestDraft>,
) -> Result<Json<Value>, AppError> {
    let owner = owner(&headers)?;
    let record = state.store.update(&owner, record_id(&id)?, draft).await?;
    Ok(Json(json!({ "success": true, "data": record })))
}

pub async fn delete_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let owner = owner(&headers)?;
    state.store.delete(&owner, record_id(&id)?).await?;
    Ok(Json(json!({ "success": true, "data": {} })))
}
