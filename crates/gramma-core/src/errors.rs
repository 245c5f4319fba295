//! Cross-cutting error types for GrammaScan.
//!
//! Transport and storage errors live in their respective crates
//! (`ClientError`, `StoreError`). The binary converges everything into
//! `anyhow::Error` at the edge.

use thiserror::Error;

/// Input rejected before it reaches a service.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Blank text or an unknown wire value.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Reject input that is empty after trimming.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming `field` when `value` is blank.
pub fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}
