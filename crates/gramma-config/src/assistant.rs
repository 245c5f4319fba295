//! Assistant API endpoint configuration (client side).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::default_timeout_secs;

fn default_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantConfig {
    /// Base URL serving `/api/ai-assistant/*`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AssistantConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join an API path (e.g. `chat`, `sessions/42`) onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/api/ai-assistant/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_paths() {
        let config = AssistantConfig::default();
        assert_eq!(
            config.endpoint("grammar-suggestions"),
            "http://127.0.0.1:3000/api/ai-assistant/grammar-suggestions"
        );
        let config = AssistantConfig {
            url: "https://gramma.example/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint("/sessions"),
            "https://gramma.example/api/ai-assistant/sessions"
        );
    }
}
