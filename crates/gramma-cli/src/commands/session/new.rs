use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Created {
    session_id: String,
}

pub async fn run(title: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session_id = ctx
        .assistant
        .create_session(title)
        .await
        .context("failed to create session")?;
    output(&Created { session_id }, flags.format)
}
