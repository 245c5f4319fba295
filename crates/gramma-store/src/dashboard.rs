//! Dashboard state: the grammar-check history and its derived stats.
//!
//! [`Dashboard`] is the single owner of this state. Every mutation goes
//! through its mutex, so concurrent tasks see the same sequential semantics
//! as a single UI thread. A file-backed dashboard also takes the history's
//! cross-process lock and re-reads the file before writing, so other
//! `gramma` processes sharing the file neither lose appends nor see a
//! cleared history come back.
//!
//! Requests are not cancellable. A check that was started before
//! [`Dashboard::clear`] may still complete afterwards; its result must not
//! land in the freshly reset history. Callers take a [`CheckTicket`] before
//! sending the request and hand it back with the result; a ticket from an
//! older epoch, or from before a clear by another process, is rejected as
//! [`Applied::Stale`].

use gramma_core::activity::{ActivityEntry, digest};
use gramma_core::entities::{GrammarResult, Stats};
use gramma_core::stats::aggregate;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::history::HistoryFile;

/// Proof that a check was started in a particular history epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket {
    epoch: u64,
    /// On-disk clear count when the ticket was issued.
    generation: u64,
}

/// Outcome of [`Dashboard::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The result was appended; stats after the append.
    Appended(Stats),
    /// The history was cleared after the check started; nothing changed.
    Stale,
}

/// What the dashboard view renders.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub stats: Stats,
    pub recent: Vec<ActivityEntry>,
}

#[derive(Debug, Default)]
struct State {
    history: Vec<GrammarResult>,
    stats: Stats,
    epoch: u64,
}

/// Owner of the grammar history, its stats, and optional persistence.
#[derive(Debug, Default)]
pub struct Dashboard {
    state: Mutex<State>,
    file: Option<HistoryFile>,
}

impl Dashboard {
    /// An empty, in-memory dashboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A dashboard backed by `file`, loading whatever history it holds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the existing file cannot be read or parsed.
    pub fn open(file: HistoryFile) -> Result<Self, StoreError> {
        let history = file.load()?;
        tracing::debug!(path = %file.path().display(), entries = history.len(), "history loaded");
        let stats = aggregate(&history);
        Ok(Self {
            state: Mutex::new(State {
                history,
                stats,
                epoch: 0,
            }),
            file: Some(file),
        })
    }

    /// Record that a check is about to be sent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the history's generation cannot be read.
    pub async fn begin_check(&self) -> Result<CheckTicket, StoreError> {
        let state = self.state.lock().await;
        let generation = match &self.file {
            Some(file) => file.generation()?,
            None => 0,
        };
        Ok(CheckTicket {
            epoch: state.epoch,
            generation,
        })
    }

    /// Append a completed check, unless the history was reset since `ticket`
    /// was issued.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the lock cannot be taken or persisting the
    /// new history fails; the in-memory history is left unchanged then.
    pub async fn apply(
        &self,
        ticket: CheckTicket,
        result: GrammarResult,
    ) -> Result<Applied, StoreError> {
        let mut state = self.state.lock().await;
        if ticket.epoch != state.epoch {
            tracing::debug!(
                ticket = ticket.epoch,
                current = state.epoch,
                "dropping grammar result that arrived after a reset"
            );
            return Ok(Applied::Stale);
        }

        let Some(file) = &self.file else {
            state.history.push(result);
            state.stats = aggregate(&state.history);
            return Ok(Applied::Appended(state.stats));
        };

        let _lock = file.lock().await?;
        let mut next = file.load()?;
        let generation = file.generation()?;
        if generation != ticket.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = generation,
                "history was cleared by another process; dropping grammar result"
            );
            state.stats = aggregate(&next);
            state.history = next;
            return Ok(Applied::Stale);
        }

        next.push(result);
        file.save(&next)?;
        state.stats = aggregate(&next);
        state.history = next;
        Ok(Applied::Appended(state.stats))
    }

    /// Empty the history and reset stats to their zero-history defaults.
    /// Returns how many entries were removed.
    ///
    /// Outstanding tickets become stale, including those held by other
    /// processes sharing the history file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the lock cannot be taken or the history
    /// file cannot be read or removed.
    pub async fn clear(&self) -> Result<usize, StoreError> {
        let mut state = self.state.lock().await;
        let removed = match &self.file {
            Some(file) => {
                let _lock = file.lock().await?;
                let removed = file.load()?.len();
                let generation = file.clear()?;
                tracing::debug!(path = %file.path().display(), removed, generation, "history cleared");
                removed
            }
            None => state.history.len(),
        };
        state.history.clear();
        state.stats = aggregate(&state.history);
        state.epoch += 1;
        Ok(removed)
    }

    pub async fn stats(&self) -> Stats {
        self.state.lock().await.stats
    }

    /// The history in chronological order.
    pub async fn history(&self) -> Vec<GrammarResult> {
        self.state.lock().await.history.clone()
    }

    /// The history newest first, for display.
    pub async fn history_newest_first(&self) -> Vec<GrammarResult> {
        let mut history = self.history().await;
        history.reverse();
        history
    }

    pub async fn snapshot(&self, recent_limit: usize) -> DashboardSnapshot {
        let state = self.state.lock().await;
        DashboardSnapshot {
            stats: state.stats,
            recent: digest(&state.history, recent_limit),
        }
    }
}
