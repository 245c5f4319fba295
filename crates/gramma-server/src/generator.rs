//! The LLM seam.

use async_trait::async_trait;

use crate::error::ServerError;

/// One text-generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Anything that turns a system prompt and a user prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerateRequest<'_>) -> Result<String, ServerError>;
}
