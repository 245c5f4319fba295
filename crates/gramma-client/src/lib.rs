//! # gramma-client
//!
//! HTTP clients for the services GrammaScan depends on:
//! - the grammar-analysis backend (`POST /check_grammar/`)
//! - the assistant API (`/api/ai-assistant/*`): chat, grammar suggestions,
//!   and chat sessions
//!
//! Both services are opaque collaborators. Failures are surfaced as
//! [`ClientError`]; nothing is retried and no defaulted result is ever
//! returned in place of a failed one.

mod assistant;
mod error;
mod grammar;
mod http;

pub use assistant::AssistantClient;
pub use error::ClientError;
pub use grammar::GrammarClient;
