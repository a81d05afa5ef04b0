use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use glint::suggest::{GeminiClient, SuggestionError, SuggestionRequest, SuggestionService};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::net::TcpListener;

async fn generate(
    Path(target): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if query.get("key").map(String::as_str) != Some("test-key") {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": {"code": 403, "message": "API key not valid"}})),
        );
    }
    if target == "empty-model:generateContent" {
        return (StatusCode::OK, Json(json!({"candidates": []})));
    }

    let prompt = payload["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    let answer = format!(
        "model={} tokens={} mentions_status={}",
        target,
        payload["generationConfig"]["maxOutputTokens"],
        prompt.contains("- Status: 401")
    );
    (
        StatusCode::OK,
        Json(json!({"candidates": [{"content": {"parts": [{"text": answer}]}}]})),
    )
}

async fn spawn_gemini() -> String {
    let app = Router::new().route("/v1beta/models/:target", post(generate));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn failed_request() -> SuggestionRequest {
    SuggestionRequest {
        url: "https://api.example.com/me".to_string(),
        method: "GET".to_string(),
        response_status: Some(401),
        response_data: Some(json!({"error": "token expired"})),
        ..Default::default()
    }
}

#[tokio::test]
async fn returns_model_text() {
    let base = spawn_gemini().await;
    let client = GeminiClient::new("test-key", "gemini-2.0-flash", base).unwrap();

    let suggestion = client.suggest(&failed_request()).await.unwrap();
    assert_eq!(
        suggestion,
        "model=gemini-2.0-flash:generateContent tokens=500 mentions_status=true"
    );
}

#[tokio::test]
async fn api_error_is_surfaced() {
    let base = spawn_gemini().await;
    let client = GeminiClient::new("wrong-key", "gemini-2.0-flash", base).unwrap();

    match client.generate(&failed_request()).await {
        Err(SuggestionError::Api { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_answer_is_an_error() {
    let base = spawn_gemini().await;
    let client = GeminiClient::new("test-key", "empty-model", base).unwrap();

    let err = client.generate(&failed_request()).await.unwrap_err();
    assert!(matches!(err, SuggestionError::Empty));
    assert_eq!(err.to_string(), "No response from AI model");
}
