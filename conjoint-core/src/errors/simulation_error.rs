//! Choice-simulation errors.

use super::error_code::{self, ErrorCode};

/// Errors from invalid simulation arguments.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Respondent count must be positive, got {given}")]
    InvalidRespondentCount { given: u32 },

    #[error("Tasks per respondent must be positive, got {given}")]
    InvalidTaskCount { given: u32 },
}

impl ErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ARGUMENT
    }
}
