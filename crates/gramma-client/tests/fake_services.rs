//! Clients against in-process fake services bound to an ephemeral port.

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{delete, post},
};
use gramma_client::{AssistantClient, ClientError, GrammarClient};
use gramma_config::{AssistantConfig, BackendConfig};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn backend(url: String) -> BackendConfig {
    BackendConfig {
        url,
        timeout_secs: 5,
    }
}

fn assistant(url: String) -> AssistantConfig {
    AssistantConfig {
        url,
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn grammar_check_echoes_sentence() {
    let router = Router::new().route(
        "/check_grammar/",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "sentence": body["text"],
                "ll1_valid": true,
                "dep_valid": true,
                "language_tool_issues": [],
                "is_grammatically_correct": true
            }))
        }),
    );
    let client = GrammarClient::new(&backend(spawn(router).await)).unwrap();

    let result = client.check("I like tea.").await.unwrap();
    assert_eq!(result.sentence, "I like tea.");
    assert!(result.dependency_valid);
    assert!(result.is_grammatically_correct);
}

#[tokio::test]
async fn grammar_check_server_error_is_api_error() {
    let router = Router::new().route(
        "/check_grammar/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = GrammarClient::new(&backend(spawn(router).await)).unwrap();

    let err = client.check("I like tea.").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
}

#[tokio::test]
async fn grammar_check_rate_limit_is_reported() {
    let router = Router::new().route(
        "/check_grammar/",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": "Rate limit exceeded. Please wait a few minutes and try again." })),
            )
        }),
    );
    let client = GrammarClient::new(&backend(spawn(router).await)).unwrap();

    let err = client.check("I like tea.").await.unwrap_err();
    assert!(matches!(err, ClientError::RateLimited { retry_after_secs: 60 }));
}

#[tokio::test]
async fn unreachable_backend_is_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = GrammarClient::new(&backend(format!("http://{addr}"))).unwrap();

    let err = client.check("I like tea.").await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn suggestions_fall_back_on_plain_text_body() {
    let router = Router::new().route(
        "/api/ai-assistant/grammar-suggestions",
        post(|| async { "Use a comma\n\nAvoid passive voice" }),
    );
    let client = AssistantClient::new(&assistant(spawn(router).await)).unwrap();

    let suggestions = client.grammar_suggestions("text").await.unwrap();
    assert_eq!(suggestions, vec!["Use a comma", "Avoid passive voice"]);
}

#[tokio::test]
async fn chat_sends_session_id() {
    let router = Router::new().route(
        "/api/ai-assistant/chat",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "id": "1",
                "role": "assistant",
                "content": format!("session={}", body["sessionId"].as_str().unwrap_or("-")),
                "timestamp": "2024-06-10T08:00:00Z",
                "type": "text"
            }))
        }),
    );
    let client = AssistantClient::new(&assistant(spawn(router).await)).unwrap();

    let reply = client.chat("hello", Some("42"), None).await.unwrap();
    assert_eq!(reply.content, "session=42");
}

#[tokio::test]
async fn delete_without_route_is_not_implemented() {
    let router = Router::new().route(
        "/api/ai-assistant/sessions/:id",
        delete(|| async { StatusCode::METHOD_NOT_ALLOWED }),
    );
    let client = AssistantClient::new(&assistant(spawn(router).await)).unwrap();

    let err = client.delete_session("42").await.unwrap_err();
    assert!(matches!(err, ClientError::NotImplemented(_)));
}
