//! Statistics aggregator over the grammar-check history.
//!
//! [`aggregate`] is a pure function of the history. Whoever owns the history
//! recomputes it on every append or clear; stats are never patched
//! incrementally.

use crate::entities::{GrammarResult, Stats};

/// Minimum history length before `improvement` is reported.
pub const IMPROVEMENT_MIN_CHECKS: usize = 20;

/// Size of the first and last windows compared for `improvement`.
pub const IMPROVEMENT_WINDOW: usize = 10;

/// Derive a [`Stats`] snapshot from the full history, oldest first.
#[must_use]
pub fn aggregate(history: &[GrammarResult]) -> Stats {
    let total = history.len();
    if total == 0 {
        return Stats::default();
    }

    let correct = count_correct(history);
    #[allow(clippy::cast_precision_loss)]
    let ratio = correct as f64 / total as f64;

    Stats {
        total_checks: saturating_u32(total),
        grammar_score: u32::try_from(round_half_up(ratio * 100.0)).unwrap_or(100),
        improvement: improvement(history),
        streak: saturating_u32(streak(history)),
    }
}

/// Number of consecutive correct checks at the end of the history.
#[must_use]
pub fn streak(history: &[GrammarResult]) -> usize {
    history
        .iter()
        .rev()
        .take_while(|r| r.is_grammatically_correct)
        .count()
}

/// Score of the last ten checks minus the score of the first ten.
///
/// Each window is scored over a fixed denominator of ten. Below
/// [`IMPROVEMENT_MIN_CHECKS`] entries the result is 0.
#[must_use]
pub fn improvement(history: &[GrammarResult]) -> i32 {
    if history.len() < IMPROVEMENT_MIN_CHECKS {
        return 0;
    }
    let first = window_score(&history[..IMPROVEMENT_WINDOW]);
    let last = window_score(&history[history.len() - IMPROVEMENT_WINDOW..]);
    i32::try_from(round_half_up(last - first)).unwrap_or(0)
}

fn window_score(window: &[GrammarResult]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let correct = count_correct(window) as f64;
    #[allow(clippy::cast_precision_loss)]
    let denominator = IMPROVEMENT_WINDOW as f64;
    correct / denominator * 100.0
}

fn count_correct(history: &[GrammarResult]) -> usize {
    history.iter().filter(|r| r.is_grammatically_correct).count()
}

/// Round to the nearest integer, halves toward positive infinity.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
