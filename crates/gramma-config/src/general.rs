//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// Default number of entries in the recent-activity panel.
const fn default_recent_limit() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Grammar history file. Empty means `<data_dir>/gramma/history.json`.
    #[serde(default)]
    pub history_path: String,

    /// Whether grammar history survives between runs.
    #[serde(default = "default_true")]
    pub persist_history: bool,

    /// Entries shown in the recent-activity panel.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            history_path: String::new(),
            persist_history: default_true(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl GeneralConfig {
    /// Resolve the history file location.
    ///
    /// Returns `None` when no path is configured and the platform has no
    /// data directory.
    #[must_use]
    pub fn resolved_history_path(&self) -> Option<PathBuf> {
        if self.history_path.is_empty() {
            dirs::data_dir().map(|p| p.join("gramma").join("history.json"))
        } else {
            Some(PathBuf::from(&self.history_path))
        }
    }
}
