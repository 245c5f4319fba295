//! The CLI's `AssistantClient` talking to this server over real sockets.

use std::sync::Arc;

use async_trait::async_trait;
use gramma_client::{AssistantClient, ClientError};
use gramma_config::{AssistantConfig, ConfigError, GrammaConfig, LlmConfig};
use gramma_core::enums::Role;
use gramma_server::{AppState, GenerateRequest, ServerError, TextGenerator, app};
use gramma_store::MemorySessionStore;
use pretty_assertions::assert_eq;

struct Echo;

#[async_trait]
impl TextGenerator for Echo {
    async fn generate(&self, request: GenerateRequest<'_>) -> Result<String, ServerError> {
        if request.prompt.contains("fail") {
            return Err(ServerError::Llm("scripted failure".to_string()));
        }
        Ok(format!("echo: {}", request.prompt))
    }
}

async fn start() -> AssistantClient {
    let state = AppState::new(
        Arc::new(MemorySessionStore::new()),
        Arc::new(Echo),
        LlmConfig::default(),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    AssistantClient::new(&AssistantConfig {
        url: format!("http://{addr}"),
        ..AssistantConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn session_lifecycle() {
    let client = start().await;

    let id = client.create_session(Some("Essay")).await.unwrap();
    let reply = client.chat("hello", Some(&id), None).await.unwrap();
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.content, "echo: hello");

    let sessions = client.list_sessions().await.unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].title, "Essay");
    assert_eq!(sessions[0].messages.len(), 2);

    client.delete_session(&id).await.unwrap();
    assert!(client.list_sessions().await.unwrap().is_empty());

    let err = client.delete_session(&id).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
}

#[tokio::test]
async fn suggestions_survive_plain_text_provider_output() {
    let client = start().await;
    let suggestions = client.grammar_suggestions("She go").await.unwrap();
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].starts_with("echo: Please analyze this text"));
}

#[tokio::test]
async fn provider_failure_surfaces_error_body() {
    let client = start().await;
    let err = client.chat("please fail", None, None).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to process message");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn serve_refuses_to_start_without_llm_key_or_with_bad_bind() {
    let err = gramma_server::serve(&GrammaConfig::default()).await.unwrap_err();
    assert!(matches!(
        err,
        ServerError::Config(ConfigError::NotConfigured { env_var: "GRAMMA_LLM__API_KEY", .. })
    ));

    let mut config = GrammaConfig::default();
    config.llm.api_key = "AIza-test".to_string();
    config.server.bind = "localhost".to_string();
    let err = gramma_server::serve(&config).await.unwrap_err();
    assert!(matches!(err, ServerError::Config(ConfigError::InvalidBind { .. })));
}
