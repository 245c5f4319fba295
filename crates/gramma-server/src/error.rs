//! Server error types.

use gramma_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The LLM provider failed or returned an unusable response.
    #[error("LLM error: {0}")]
    Llm(String),

    /// HTTP transport error talking to the LLM provider.
    #[error("LLM transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing LLM key or an unusable `server.bind`.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
