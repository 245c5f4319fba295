//! Assistant API routes.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use gramma_core::api::{
    ApiErrorBody, ChatRequest, CreateSessionRequest, CreateSessionResponse, SuggestionsRequest,
    SuggestionsResponse,
};
use gramma_core::entities::{ChatMessage, ChatSession};
use gramma_core::errors::require_text;
use gramma_core::suggestions::parse_suggestions;
use gramma_store::StoreError;

use crate::AppState;
use crate::generator::GenerateRequest;
use crate::prompts;

pub const CHAT_FAILED: &str = "Failed to process message";
pub const SUGGESTIONS_FAILED: &str = "Failed to generate suggestions";
pub const CREATE_SESSION_FAILED: &str = "Failed to create session";

type ApiError = (StatusCode, Json<ApiErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ApiErrorBody::new(message)))
}

/// Routes for the assistant API, mounted under `/api/ai-assistant`.
pub fn router(state: AppState) -> Router {
    let assistant = Router::new()
        .route("/chat", post(chat))
        .route("/grammar-suggestions", post(grammar_suggestions))
        .route("/sessions", get(list_sessions).post(create_session))
        .route("/sessions/:id", delete(delete_session))
        .with_state(state);
    Router::new().nest("/api/ai-assistant", assistant)
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatMessage>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))?;
    let message = require_text(&request.message, "message")
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    // Stamped on send, so the stored exchange stays in order.
    let user = ChatMessage::user(message);
    let prompt = prompts::chat_prompt(message, request.context.as_deref());
    let text = state
        .llm
        .generate(GenerateRequest {
            system: prompts::CHAT_SYSTEM,
            prompt: &prompt,
            max_tokens: state.llm_config.chat_max_tokens,
            temperature: state.llm_config.chat_temperature,
        })
        .await
        .map_err(|error| {
            tracing::error!(%error, "chat generation failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, CHAT_FAILED)
        })?;

    let reply = ChatMessage::assistant(text);
    if let Some(session_id) = request.session_id.as_deref() {
        record_exchange(&state, session_id, user, &reply).await;
    }
    Ok(Json(reply))
}

/// Append both sides of a chat exchange to a known session.
async fn record_exchange(state: &AppState, session_id: &str, user: ChatMessage, reply: &ChatMessage) {
    for msg in [user, reply.clone()] {
        match state.store.append(session_id, msg).await {
            Ok(_) => {}
            Err(StoreError::SessionNotFound(_)) => {
                tracing::debug!(session = %session_id, "chat for unknown session not recorded");
                return;
            }
            Err(error) => {
                tracing::warn!(session = %session_id, %error, "failed to record chat");
                return;
            }
        }
    }
}

async fn grammar_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionsRequest>, JsonRejection>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| api_error(StatusCode::BAD_REQUEST, rejection.body_text()))?;
    let text = require_text(&request.text, "text")
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let prompt = prompts::suggestions_prompt(text);
    let raw = state
        .llm
        .generate(GenerateRequest {
            system: prompts::SUGGESTIONS_SYSTEM,
            prompt: &prompt,
            max_tokens: state.llm_config.suggestions_max_tokens,
            temperature: state.llm_config.suggestions_temperature,
        })
        .await
        .map_err(|error| {
            tracing::error!(%error, "suggestion generation failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, SUGGESTIONS_FAILED)
        })?;

    Ok(Json(SuggestionsResponse {
        suggestions: parse_suggestions(&raw),
    }))
}

async fn list_sessions(State(state): State<AppState>) -> Json<Vec<ChatSession>> {
    Json(state.store.list().await)
}

/// An empty body creates an untitled session.
async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateSessionResponse>, ApiError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        CreateSessionRequest::default()
    } else {
        serde_json::from_slice::<CreateSessionRequest>(&body).map_err(|error| {
            tracing::warn!(%error, "unreadable create-session body");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, CREATE_SESSION_FAILED)
        })?
    };

    let session = state.store.create(request.title).await;
    Ok(Json(CreateSessionResponse {
        session_id: session.id,
    }))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    match state.store.delete(&id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(StoreError::SessionNotFound(_)) => Err(api_error(
            StatusCode::NOT_FOUND,
            format!("Session not found: {id}"),
        )),
        Err(error) => {
            tracing::error!(session = %id, %error, "failed to delete session");
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()))
        }
    }
}
