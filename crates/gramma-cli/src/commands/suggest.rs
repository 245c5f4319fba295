use anyhow::Context;
use gramma_core::errors::require_text;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SuggestArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `gramma suggest`.
pub async fn handle(args: &SuggestArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = require_text(&args.text, "text")?;

    let suggestions = Progress::spinner("Analyzing text...")
        .wrap(ctx.assistant.grammar_suggestions(text))
        .await
        .context("suggestion request failed")?;

    output(&suggestions, flags.format)
}
