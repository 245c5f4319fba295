use anyhow::Context;
use gramma_core::errors::require_text;

use crate::cli::root_commands::ChatArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `gramma chat`.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let message = require_text(&args.message, "message")?;

    let reply = Progress::spinner("Thinking...")
        .wrap(ctx.assistant.chat(
            message,
            args.session.as_deref(),
            args.context.as_deref(),
        ))
        .await
        .context("assistant request failed")?;

    if flags.format == OutputFormat::Table {
        println!("{}", reply.content);
        return Ok(());
    }
    output(&reply, flags.format)
}
