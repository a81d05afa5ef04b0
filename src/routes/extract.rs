use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` extractor whose rejections are reported in the API's
/// `{ success: false, error }` shape instead of axum's plain-text body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
