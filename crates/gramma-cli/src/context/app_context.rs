use anyhow::Context;
use gramma_client::{AssistantClient, GrammarClient};
use gramma_config::GrammaConfig;
use gramma_store::{Dashboard, HistoryFile};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: GrammaConfig,
    pub grammar: GrammarClient,
    pub assistant: AssistantClient,
    pub dashboard: Dashboard,
}

impl AppContext {
    pub fn init(config: GrammaConfig) -> anyhow::Result<Self> {
        let grammar =
            GrammarClient::new(&config.backend).context("failed to build grammar client")?;
        let assistant = AssistantClient::new(&config.assistant)
            .context("failed to build assistant client")?;
        let dashboard = open_dashboard(&config)?;

        Ok(Self {
            config,
            grammar,
            assistant,
            dashboard,
        })
    }

    /// Entries in the recent-activity panel when `--limit` is not given.
    pub const fn recent_limit(&self) -> u32 {
        self.config.general.recent_limit
    }
}

fn open_dashboard(config: &GrammaConfig) -> anyhow::Result<Dashboard> {
    if !config.general.persist_history {
        return Ok(Dashboard::new());
    }
    let Some(path) = config.general.resolved_history_path() else {
        tracing::warn!("no data directory available; grammar history will not be saved");
        return Ok(Dashboard::new());
    };
    let file = HistoryFile::new(path);
    let location = file.path().display().to_string();
    Dashboard::open(file).with_context(|| format!("failed to load grammar history from {location}"))
}
