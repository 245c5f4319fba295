use std::fmt::Write as _;

use gramma_core::activity::ActivityEntry;
use gramma_core::entities::{GrammarTip, Stats};
use gramma_core::tips::catalog;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::effective_limit;
use crate::context::AppContext;
use crate::output::table::{TableOptions, render_entity_table};
use crate::output::{output, table_options};

/// Everything the dashboard shows.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub stats: Stats,
    pub recent: Vec<ActivityEntry>,
    pub tips: Vec<GrammarTip>,
}

/// Handle `gramma dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, ctx.recent_limit());
    let snapshot = ctx.dashboard.snapshot(limit as usize).await;
    let view = DashboardView {
        stats: snapshot.stats,
        recent: snapshot.recent,
        tips: catalog(),
    };

    if flags.format == OutputFormat::Table {
        println!("{}", render_dashboard(&view, table_options()));
        return Ok(());
    }
    output(&view, flags.format)
}

#[must_use]
pub fn render_dashboard(view: &DashboardView, options: TableOptions) -> String {
    let stats = &view.stats;
    let mut out = String::from("Statistics\n");
    out.push_str(&render_entity_table(
        &["total checks", "grammar score", "improvement", "streak"],
        &[vec![
            stats.total_checks.to_string(),
            format!("{}%", stats.grammar_score),
            format!("{:+}%", stats.improvement),
            stats.streak.to_string(),
        ]],
        options,
    ));

    out.push_str("\n\nRecent activity\n");
    if view.recent.is_empty() {
        out.push_str("  No checks yet. Run `gramma check <TEXT>` to get started.\n");
    }
    for entry in &view.recent {
        let mark = if entry.correct { "✓" } else { "✗" };
        let _ = writeln!(out, "  {mark} {}", entry.sentence);
        for issue in &entry.issues {
            let _ = writeln!(out, "      - {issue}");
        }
        if entry.more_issues > 0 {
            let _ = writeln!(out, "      +{} more", entry.more_issues);
        }
    }

    out.push_str("\nTips\n");
    for tip in &view.tips {
        let _ = writeln!(out, "  [{}] {}: {}", tip.category, tip.title, tip.description);
    }
    out.trim_end().to_string()
}
