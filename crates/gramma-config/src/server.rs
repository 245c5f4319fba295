//! Assistant server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address the assistant API listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl ServerConfig {
    /// The parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBind`] if `bind` is not `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|source| ConfigError::InvalidBind {
                bind: self.bind.clone(),
                source,
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}
