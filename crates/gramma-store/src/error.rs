//! Store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No chat session with this id.
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Reading or writing the history file failed.
    #[error("History I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The history file does not contain a JSON array of grammar results.
    #[error("History file {path} is malformed: {source}")]
    Serde {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Another live process kept the history write lock past the wait timeout.
    #[error("History is locked at {path}{}", .holder.map(|pid| format!(" by pid {pid}")).unwrap_or_default())]
    Locked { path: String, holder: Option<i32> },
}
