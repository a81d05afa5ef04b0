pub mod extract;
pub mod health;
pub mod proxy;
pub mod requests;
pub mod samples;
pub mod static_files;
pub mod suggest;

use axum::{
    http::{header::InvalidHeaderValue, HeaderValue},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::proxy::RequestExecutor;
use crate::store::RequestStore;
use crate::suggest::SuggestionService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<dyn RequestExecutor>,
    /// `None` when no AI key is configured.
    pub suggester: Option<Arc<dyn SuggestionService>>,
    pub store: RequestStore,
}

impl AppState {
    pub fn new(
        executor: Arc<dyn RequestExecutor>,
        suggester: Option<Arc<dyn SuggestionService>>,
    ) -> Self {
        Self {
            executor,
            suggester,
            store: RequestStore::new(),
        }
    }
}

/// Builds the application router without middleware layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/samples", get(samples::list_samples))
        .route(
            "/api/request",
            get(requests::list_requests).post(requests::save_request),
        )
        .route("/api/request/execute", post(proxy::execute_request))
        .route(
            "/api/request/:id",
            get(requests::get_request)
                .put(requests::update_request)
                .delete(requests::delete_request),
        )
        .route("/api/ai/suggest", post(suggest::get_suggestion))
        .fallback(static_files::serve_static)
        .with_state(state)
}

/// CORS policy for the configured frontend origin, with credentials.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(origin.parse::<HeaderValue>()?)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
