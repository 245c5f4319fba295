//! # gramma-store
//!
//! State owned by GrammaScan processes:
//! - [`SessionStore`]: chat sessions, with the non-durable
//!   [`MemorySessionStore`] as the only implementation
//! - [`HistoryFile`]: the grammar-check history as a flat JSON array on disk
//! - [`HistoryLock`]: cross-process write lock taken around every history
//!   mutation
//! - [`Dashboard`]: single owner of the history and its derived stats, with a
//!   guard that drops late results arriving after a reset

pub mod dashboard;
pub mod error;
pub mod history;
pub mod lock;
pub mod session;

pub use dashboard::{Applied, CheckTicket, Dashboard, DashboardSnapshot};
pub use error::StoreError;
pub use history::HistoryFile;
pub use lock::HistoryLock;
pub use session::{MemorySessionStore, SessionStore};
