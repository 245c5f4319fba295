use anyhow::Context;
use serde::Serialize;

use gramma_core::entities::Stats;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Cleared {
    cleared: usize,
    stats: Stats,
}

/// Handle `gramma history`.
pub async fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.clear {
        let cleared = ctx
            .dashboard
            .clear()
            .await
            .context("failed to clear grammar history")?;
        return output(
            &Cleared {
                cleared,
                stats: ctx.dashboard.stats().await,
            },
            flags.format,
        );
    }

    let mut history = ctx.dashboard.history_newest_first().await;
    if let Some(limit) = flags.limit {
        history.truncate(limit as usize);
    }
    output(&history, flags.format)
}
