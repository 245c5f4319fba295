//! Shared HTTP helpers for the GrammaScan clients.
//!
//! Centralizes client construction and status-code checks (429 with
//! `Retry-After` parsing, non-success → [`ClientError::Api`]) so the
//! individual clients stay focused on request construction and response
//! mapping.

use std::time::Duration;

use gramma_core::api::ApiErrorBody;

use crate::error::ClientError;

const USER_AGENT: &str = concat!("gramma/", env!("CARGO_PKG_VERSION"));

/// Build a reqwest client with the GrammaScan user agent and `timeout`.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ClientError> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ClientError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`ClientError::Api`] with status code and
///   the `error` field of the body (or the raw body).
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        tracing::warn!(url = %resp.url(), retry_after, "rate limited");
        return Err(ClientError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        tracing::warn!(url = %resp.url(), status, "request failed");
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Prefer the `{ "error": ... }` field; fall back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body).map_or_else(|_| body.trim().to_string(), |b| b.error)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
