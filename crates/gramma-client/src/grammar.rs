//! Grammar-analysis backend client.

use gramma_config::BackendConfig;
use gramma_core::api::CheckGrammarRequest;
use gramma_core::entities::GrammarResult;

use crate::error::ClientError;
use crate::http::{build_client, check_response};

/// Client for the external grammar backend.
#[derive(Debug, Clone)]
pub struct GrammarClient {
    http: reqwest::Client,
    check_url: String,
}

impl GrammarClient {
    /// Create a client for the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: build_client(config.timeout())?,
            check_url: config.check_url(),
        })
    }

    /// Submit `text` for analysis.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status (429 when its language tool is rate limited), or
    /// the body is not a grammar result.
    pub async fn check(&self, text: &str) -> Result<GrammarResult, ClientError> {
        tracing::debug!(url = %self.check_url, chars = text.len(), "checking grammar");
        let body = CheckGrammarRequest {
            text: text.to_string(),
        };
        let resp = check_response(self.http.post(&self.check_url).json(&body).send().await?).await?;
        let raw = resp.text().await?;
        parse_result(&raw)
    }
}

fn parse_result(raw: &str) -> Result<GrammarResult, ClientError> {
    serde_json::from_str(raw).map_err(|e| ClientError::Parse(format!("grammar result: {e}")))
}
