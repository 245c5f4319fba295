use anyhow::Context;
use gramma_core::entities::ChatSession;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// One row of `gramma session list`.
#[derive(Debug, Serialize)]
struct SessionRow {
    id: String,
    title: String,
    messages: usize,
    last: String,
    updated: String,
}

const LAST_PREVIEW_CHARS: usize = 40;

/// First line of `content`, cut to [`LAST_PREVIEW_CHARS`].
fn preview(content: &str) -> String {
    let mut lines = content.lines();
    let first = lines.next().unwrap_or_default();
    if first.chars().count() <= LAST_PREVIEW_CHARS && lines.next().is_none() {
        return first.to_string();
    }
    let cut: String = first.chars().take(LAST_PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}

impl From<&ChatSession> for SessionRow {
    fn from(session: &ChatSession) -> Self {
        Self {
            id: session.id.clone(),
            title: session.title.clone(),
            messages: session.messages.len(),
            last: session
                .last_message()
                .map(|m| format!("{}: {}", m.role, preview(&m.content)))
                .unwrap_or_default(),
            updated: session.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sessions = ctx
        .assistant
        .list_sessions()
        .await
        .context("failed to list sessions")?;
    let limit = effective_limit(None, flags.limit, 20) as usize;

    match flags.format {
        OutputFormat::Table => {
            let rows: Vec<SessionRow> = sessions.iter().take(limit).map(SessionRow::from).collect();
            output(&rows, flags.format)
        }
        _ => output(&sessions.into_iter().take(limit).collect::<Vec<_>>(), flags.format),
    }
}
