//! Errors raised while loading or validating GrammaScan configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `GRAMMA_*` variable could not be parsed.
    #[error("Invalid GrammaScan configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A `.env` file exists but could not be read or parsed.
    #[error("Failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    /// A command needs a setting that has no value.
    #[error("{feature} needs {setting}; set {env_var} or add it to .gramma/config.toml")]
    NotConfigured {
        feature: &'static str,
        setting: &'static str,
        env_var: &'static str,
    },

    /// A timeout is out of range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },

    /// `server.bind` is not a `host:port` socket address.
    #[error("server.bind '{bind}' is not a socket address such as 127.0.0.1:3000: {source}")]
    InvalidBind {
        bind: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
