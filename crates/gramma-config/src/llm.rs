//! LLM provider configuration for the assistant server.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::default_timeout_secs;

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

const fn default_chat_max_tokens() -> u32 {
    1000
}

const fn default_chat_temperature() -> f32 {
    0.7
}

const fn default_suggestions_max_tokens() -> u32 {
    500
}

const fn default_suggestions_temperature() -> f32 {
    0.3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Provider API key. Empty means the assistant is not configured.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_chat_max_tokens")]
    pub chat_max_tokens: u32,

    #[serde(default = "default_chat_temperature")]
    pub chat_temperature: f32,

    #[serde(default = "default_suggestions_max_tokens")]
    pub suggestions_max_tokens: u32,

    #[serde(default = "default_suggestions_temperature")]
    pub suggestions_temperature: f32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            chat_max_tokens: default_chat_max_tokens(),
            chat_temperature: default_chat_temperature(),
            suggestions_max_tokens: default_suggestions_max_tokens(),
            suggestions_temperature: default_suggestions_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = LlmConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.chat_max_tokens, 1000);
        assert_eq!(config.suggestions_max_tokens, 500);
    }

    #[test]
    fn configured_when_key_set() {
        let config = LlmConfig {
            api_key: "AIza-test".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
