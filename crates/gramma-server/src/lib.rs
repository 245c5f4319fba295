//! # gramma-server
//!
//! The assistant API consumed by `gramma chat`, `gramma suggest` and
//! `gramma session`: a thin pass-through over an LLM provider plus a mock,
//! process-lifetime session store.
//!
//! ## Endpoints
//!
//! - `POST   /api/ai-assistant/chat` - one assistant reply
//! - `POST   /api/ai-assistant/grammar-suggestions` - 3-5 improvement suggestions
//! - `GET    /api/ai-assistant/sessions` - list sessions, newest first
//! - `POST   /api/ai-assistant/sessions` - create a session
//! - `DELETE /api/ai-assistant/sessions/:id` - delete a session

pub mod error;
pub mod gemini;
pub mod generator;
pub mod prompts;
pub mod routes;

use std::sync::Arc;

use gramma_config::{GrammaConfig, LlmConfig};
use gramma_store::{MemorySessionStore, SessionStore};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ServerError;
pub use gemini::GeminiClient;
pub use generator::{GenerateRequest, TextGenerator};
pub use routes::router;

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    pub llm: Arc<dyn TextGenerator>,
    pub llm_config: Arc<LlmConfig>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn SessionStore>,
        llm: Arc<dyn TextGenerator>,
        llm_config: LlmConfig,
    ) -> Self {
        Self {
            store,
            llm,
            llm_config: Arc::new(llm_config),
        }
    }
}

/// The full application: routes plus tracing and CORS layers.
pub fn app(state: AppState) -> axum::Router {
    router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve the assistant API on `config.server.bind` until Ctrl-C.
///
/// # Errors
///
/// Returns [`ServerError::Config`] without an LLM API key or with an
/// unparseable bind address, [`ServerError::Io`] if the address cannot be
/// bound.
pub async fn serve(config: &GrammaConfig) -> Result<(), ServerError> {
    let llm_config = config.require_llm()?.clone();
    let addr = config.server.socket_addr()?;

    let llm = GeminiClient::new(&llm_config)?;
    let state = AppState::new(
        Arc::new(MemorySessionStore::new()),
        Arc::new(llm),
        llm_config,
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "assistant API listening");
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("assistant API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
