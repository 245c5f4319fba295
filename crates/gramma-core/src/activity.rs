//! Recent-activity digest for the dashboard view.
//!
//! History is stored oldest first and only reversed for display.

use serde::Serialize;

use crate::entities::GrammarResult;

/// Issues longer than this many characters are truncated in previews.
pub const ISSUE_PREVIEW_CHARS: usize = 50;

/// How many issues a single activity entry previews.
pub const ISSUES_PER_ENTRY: usize = 2;

/// One line of the recent-activity panel.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityEntry {
    pub sentence: String,
    pub correct: bool,
    pub issues: Vec<String>,
    /// Issues not shown in `issues`.
    pub more_issues: usize,
}

impl ActivityEntry {
    #[must_use]
    pub fn from_result(result: &GrammarResult) -> Self {
        let issues = &result.language_tool_issues;
        Self {
            sentence: result.sentence.clone(),
            correct: result.is_grammatically_correct,
            issues: issues
                .iter()
                .take(ISSUES_PER_ENTRY)
                .map(|issue| issue_preview(issue))
                .collect(),
            more_issues: issues.len().saturating_sub(ISSUES_PER_ENTRY),
        }
    }
}

/// The last `limit` results, newest first.
#[must_use]
pub fn recent(history: &[GrammarResult], limit: usize) -> Vec<&GrammarResult> {
    history.iter().rev().take(limit).collect()
}

/// Digest of the last `limit` results, newest first.
#[must_use]
pub fn digest(history: &[GrammarResult], limit: usize) -> Vec<ActivityEntry> {
    recent(history, limit)
        .into_iter()
        .map(ActivityEntry::from_result)
        .collect()
}

/// Truncate an issue message for preview.
#[must_use]
pub fn issue_preview(issue: &str) -> String {
    if issue.chars().count() > ISSUE_PREVIEW_CHARS {
        let head: String = issue.chars().take(ISSUE_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        issue.to_string()
    }
}
