//! # gramma-core
//!
//! Core types and pure logic for GrammaScan.
//!
//! This crate provides the foundational types shared across all GrammaScan crates:
//! - Grammar-check results and the derived [`entities::Stats`] snapshot
//! - Chat messages and sessions exchanged with the AI assistant
//! - Wire types for the assistant API
//! - The statistics aggregator ([`stats::aggregate`])
//! - Suggestion parsing with line-split fallback ([`suggestions::parse_suggestions`])
//! - The built-in grammar tips catalog and recent-activity digest
//! - Cross-cutting error types and time-derived ID generation

pub mod activity;
pub mod api;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod stats;
pub mod suggestions;
pub mod tips;
