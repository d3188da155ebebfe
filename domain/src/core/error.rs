//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid poll: {0}")]
    InvalidPoll(String),

    #[error("Poll {poll_id} has no option at index {choice}")]
    UnknownOption { poll_id: u64, choice: usize },

    #[error("Unknown poll: {0}")]
    UnknownPoll(u64),

    #[error("Invalid threshold expression: {0}")]
    InvalidThreshold(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
}

impl DomainError {
    /// Check if this error points at a missing poll or option
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownPoll(_) | DomainError::UnknownOption { .. }
        )
    }
}
