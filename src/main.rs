use glint::{
    proxy::{HttpExecutor, RequestExecutor},
    routes::{self, AppState},
    suggest::{GeminiClient, SuggestionService},
    Config,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glint=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting Glint API tester backend on port {}", config.port);

    let executor: Arc<dyn RequestExecutor> = HttpExecutor::arc()?;

    let suggester: Option<Arc<dyn SuggestionService>> = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(
                key.clone(),
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
            )?;
            tracing::info!(model = %config.gemini_model, "AI suggestions enabled");
            let client: Arc<dyn SuggestionService> = Arc::new(client);
            Some(client)
        }
        None => {
            tracing::warn!("GEMINI_API_KEY is not set, AI suggestions are disabled");
            None
        }
    };

    let cors = routes::cors_layer(&config.cors_origin)?;

    let app = routes::app(AppState::new(executor, suggester))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
