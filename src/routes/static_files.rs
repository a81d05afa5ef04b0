use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct FrontendAssets;

/// Serves the embedded browser UI, falling back to `index.html` for client routes.
pub async fn serve_static(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');

    let candidates = [
        path.to_string(),
        format!("{}.html", path),
        format!("{}/index.html", path.trim_end_matches('/')),
        "index.html".to_string(),
    ];

    for candidate in candidates.iter().filter(|c| !c.is_empty()) {
        if let Some(content) = FrontendAssets::get(candidate) {
            return response_from_asset(candidate, content.data.into_owned());
        }
    }

    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn response_from_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    let cache = if path.ends_with(".html") {
        "no-cache"
    } else {
        "public, max-age=31536000, immutable"
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime), (header::CACHE_CONTROL, cache.to_string())],
        data,
    )
        .into_response()
}
