//! Client error types.

use thiserror::Error;

/// Errors from talking to the grammar backend or the assistant API.
///
/// Every variant is a transport-class failure from the caller's point of
/// view: the request produced no usable result and may be retried by the
/// user.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (unreachable, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `error` field of the body, or the raw body.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The service returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The service does not implement the requested operation.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

impl ClientError {
    /// HTTP status associated with the failure, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::Parse(_) | Self::NotImplemented(_) => None,
        }
    }
}
