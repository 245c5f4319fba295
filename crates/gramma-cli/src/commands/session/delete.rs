use anyhow::Context;
use gramma_client::ClientError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Deleted<'a> {
    deleted: &'a str,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.assistant.delete_session(id).await {
        Ok(()) => output(&Deleted { deleted: id }, flags.format),
        Err(ClientError::NotImplemented(_)) => {
            anyhow::bail!("the assistant server at {} does not support deleting sessions", ctx.config.assistant.url)
        }
        Err(error) => Err(error).with_context(|| format!("failed to delete session {id}")),
    }
}
