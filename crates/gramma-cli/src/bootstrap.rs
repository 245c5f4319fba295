use anyhow::Context;
use gramma_config::GrammaConfig;

/// Load `.env` from the working directory (if any), then the layered config.
pub fn load_config() -> anyhow::Result<GrammaConfig> {
    let config =
        GrammaConfig::load_with_dotenv().context("failed to load gramma configuration")?;
    tracing::debug!(backend = %config.backend.url, persist_history = config.general.persist_history, "configuration loaded");
    Ok(config)
}
