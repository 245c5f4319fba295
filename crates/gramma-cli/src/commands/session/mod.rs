mod delete;
mod list;
mod new;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::context::AppContext;

/// Handle `gramma session`.
pub async fn handle(
    action: &SessionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SessionCommands::New { title } => new::run(title.as_deref(), ctx, flags).await,
        SessionCommands::List => list::run(ctx, flags).await,
        SessionCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
