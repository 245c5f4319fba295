use anyhow::Context;
use gramma_config::GrammaConfig;

use crate::cli::root_commands::ServeArgs;

/// Handle `gramma serve`.
pub async fn handle(args: &ServeArgs, mut config: GrammaConfig) -> anyhow::Result<()> {
    if let Some(bind) = &args.bind {
        config.server.bind.clone_from(bind);
    }
    gramma_server::serve(&config)
        .await
        .context("assistant server failed")
}
