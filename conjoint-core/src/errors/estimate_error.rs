//! Market-share estimation errors.

use super::error_code::{self, ErrorCode};
use super::space_error::SpaceError;
use crate::types::Attribute;

/// Errors from share estimation over scenario configurations.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("Scenario set is empty")]
    EmptyScenarioSet,

    #[error("Scenario {scenario} is missing a level for {attribute}")]
    IncompleteConfiguration {
        scenario: String,
        attribute: Attribute,
    },

    #[error(transparent)]
    Space(#[from] SpaceError),
}

impl ErrorCode for EstimateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyScenarioSet => error_code::INVALID_ARGUMENT,
            Self::IncompleteConfiguration { .. } => error_code::INCOMPLETE_CONFIGURATION,
            Self::Space(e) => e.error_code(),
        }
    }
}
