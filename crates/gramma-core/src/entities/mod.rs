//! Entity structs for GrammaScan domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Field names match the wire format used by
//! the grammar backend and the assistant API.

mod chat;
mod grammar;
mod tip;

pub use chat::{ChatMessage, ChatSession, DEFAULT_SESSION_TITLE};
pub use grammar::{GrammarResult, Stats};
pub use tip::GrammarTip;
