//! Grammar-analysis backend configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://gramma-backend.onrender.com".to_string()
}

/// Default request timeout in seconds. The backend defines none.
pub(crate) const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the grammar backend; `/check_grammar/` is appended.
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the grammar-check endpoint.
    #[must_use]
    pub fn check_url(&self) -> String {
        format!("{}/check_grammar/", self.url.trim_end_matches('/'))
    }
}
