use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gramma stats`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.dashboard.stats().await, flags.format)
}
