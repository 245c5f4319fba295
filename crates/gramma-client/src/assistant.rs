//! Assistant API client: chat, grammar suggestions, chat sessions.

use gramma_config::AssistantConfig;
use gramma_core::api::{
    ChatRequest, CreateSessionRequest, CreateSessionResponse, SuggestionsRequest,
    SuggestionsResponse,
};
use gramma_core::entities::{ChatMessage, ChatSession};
use gramma_core::suggestions::parse_suggestions;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::http::{build_client, check_response};

/// Client for the `/api/ai-assistant/*` endpoints.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    http: reqwest::Client,
    config: AssistantConfig,
}

impl AssistantClient {
    /// Create a client for the API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AssistantConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: build_client(config.timeout())?,
            config: config.clone(),
        })
    }

    /// Send one user message and receive the assistant's reply.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status, or
    /// a reply that is not a chat message.
    pub async fn chat(
        &self,
        message: &str,
        session_id: Option<&str>,
        context: Option<&str>,
    ) -> Result<ChatMessage, ClientError> {
        let body = ChatRequest {
            message: message.to_string(),
            session_id: session_id.map(str::to_string),
            context: context.map(str::to_string),
        };
        let url = self.config.endpoint("chat");
        tracing::debug!(%url, session = ?session_id, "sending chat message");
        let resp = check_response(self.http.post(&url).json(&body).send().await?).await?;
        decode(&resp.text().await?, "chat message")
    }

    /// Ask for improvement suggestions for `text`.
    ///
    /// A body that is not `{ "suggestions": [...] }` is recovered locally by
    /// [`parse_suggestions`] instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or non-success status.
    pub async fn grammar_suggestions(&self, text: &str) -> Result<Vec<String>, ClientError> {
        let body = SuggestionsRequest {
            text: text.to_string(),
        };
        let url = self.config.endpoint("grammar-suggestions");
        tracing::debug!(%url, chars = text.len(), "requesting suggestions");
        let resp = check_response(self.http.post(&url).json(&body).send().await?).await?;
        let raw = resp.text().await?;
        Ok(suggestions_from_body(&raw))
    }

    /// List chat sessions, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status, or
    /// an unexpected body.
    pub async fn list_sessions(&self) -> Result<Vec<ChatSession>, ClientError> {
        let url = self.config.endpoint("sessions");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode(&resp.text().await?, "session list")
    }

    /// Create a chat session and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status, or
    /// an unexpected body.
    pub async fn create_session(&self, title: Option<&str>) -> Result<String, ClientError> {
        let body = CreateSessionRequest {
            title: title.map(str::to_string),
        };
        let url = self.config.endpoint("sessions");
        let resp = check_response(self.http.post(&url).json(&body).send().await?).await?;
        let created: CreateSessionResponse = decode(&resp.text().await?, "created session")?;
        Ok(created.session_id)
    }

    /// Delete a chat session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotImplemented`] when the server has no delete
    /// route (405 or 501), and other [`ClientError`]s as usual.
    pub async fn delete_session(&self, id: &str) -> Result<(), ClientError> {
        let url = self
            .config
            .endpoint(&format!("sessions/{}", urlencoding::encode(id)));
        match check_response(self.http.delete(&url).send().await?).await {
            Ok(_) => Ok(()),
            Err(ClientError::Api {
                status: 405 | 501, ..
            }) => Err(ClientError::NotImplemented("session deletion".to_string())),
            Err(e) => Err(e),
        }
    }
}

fn decode<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T, ClientError> {
    serde_json::from_str(raw).map_err(|e| ClientError::Parse(format!("{what}: {e}")))
}

fn suggestions_from_body(raw: &str) -> Vec<String> {
    match serde_json::from_str::<SuggestionsResponse>(raw) {
        Ok(body) => body.suggestions,
        Err(_) => {
            tracing::debug!("suggestions body is not structured; using line fallback");
            parse_suggestions(raw)
        }
    }
}
