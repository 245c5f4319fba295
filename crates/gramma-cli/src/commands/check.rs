use anyhow::Context;
use gramma_core::entities::GrammarResult;
use gramma_core::errors::require_text;
use gramma_store::Applied;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `gramma check`.
///
/// A failed request leaves the history untouched; the user retries by
/// running the command again.
pub async fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = require_text(&args.text, "text")?;
    let result = check_and_record(ctx, text).await?;
    output(&result, flags.format)
}

async fn check_and_record(ctx: &AppContext, text: &str) -> anyhow::Result<GrammarResult> {
    let ticket = ctx
        .dashboard
        .begin_check()
        .await
        .context("failed to read grammar history")?;
    let result = Progress::spinner("Checking grammar...")
        .wrap(ctx.grammar.check(text))
        .await
        .context("grammar check failed")?;

    match ctx
        .dashboard
        .apply(ticket, result.clone())
        .await
        .context("failed to save grammar history")?
    {
        Applied::Appended(stats) => {
            tracing::debug!(total = stats.total_checks, score = stats.grammar_score, "history updated");
        }
        Applied::Stale => tracing::warn!("history was cleared while the check was running; result not saved"),
    }
    Ok(result)
}
