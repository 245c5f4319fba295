//! # gramma-config
//!
//! Layered configuration loading for GrammaScan using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GRAMMA_*` prefix, `__` as separator)
//! 2. Project-level `.gramma/config.toml`
//! 3. User-level `~/.config/gramma/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GRAMMA_BACKEND__URL` -> `backend.url`, `GRAMMA_LLM__API_KEY` -> `llm.api_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gramma_config::GrammaConfig;
//!
//! let config = GrammaConfig::load_with_dotenv().expect("config");
//! println!("grammar backend: {}", config.backend.check_url());
//! ```

mod assistant;
mod backend;
mod error;
mod general;
mod llm;
mod server;

pub use assistant::AssistantConfig;
pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use llm::LlmConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GrammaConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GrammaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the working directory, if there is one, then the
    /// layered configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dotenv`] if a `.env` file exists but cannot be
    /// read or parsed, otherwise the same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(error) if error.not_found() => {}
            Err(error) => return Err(error.into()),
        }
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on extraction failure,
    /// [`ConfigError::InvalidValue`] for a zero timeout and
    /// [`ConfigError::InvalidBind`] for an unparseable `server.bind`.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".gramma/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GRAMMA_").split("__"))
    }

    /// Require the LLM section for serving the assistant API.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no API key is set.
    pub fn require_llm(&self) -> Result<&LlmConfig, ConfigError> {
        if self.llm.is_configured() {
            Ok(&self.llm)
        } else {
            Err(ConfigError::NotConfigured {
                feature: "The assistant API",
                setting: "llm.api_key",
                env_var: "GRAMMA_LLM__API_KEY",
            })
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("backend.timeout_secs", self.backend.timeout_secs),
            ("assistant.timeout_secs", self.assistant.timeout_secs),
            ("llm.timeout_secs", self.llm.timeout_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }
        self.server.socket_addr()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gramma").join("config.toml"))
    }
}
