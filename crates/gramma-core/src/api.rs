//! Request and response bodies for the grammar backend and the assistant API.
//!
//! Field names follow the JSON the browser dashboard exchanged
//! (`sessionId`, not `session_id`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body of `POST /check_grammar/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckGrammarRequest {
    pub text: String,
}

/// Body of `POST /api/ai-assistant/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Body of `POST /api/ai-assistant/grammar-suggestions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestionsRequest {
    pub text: String,
}

/// Response of `POST /api/ai-assistant/grammar-suggestions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// Body of `POST /api/ai-assistant/sessions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateSessionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Response of `POST /api/ai-assistant/sessions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
}

/// Error body returned by every assistant endpoint on failure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
