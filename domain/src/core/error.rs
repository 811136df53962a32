//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid page identifier: {0:?}")]
    InvalidPageId(String),

    #[error("Unknown section number: {0} (expected 1, 2 or 3)")]
    UnknownSection(u8),
}

impl DomainError {
    /// Check if this error was caused by user input on the command line
    pub fn is_selector_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidPageId(_) | DomainError::UnknownSection(_)
        )
    }
}
