//! Attribute-space lookup errors.

use super::error_code::{self, ErrorCode};
use crate::types::Attribute;

/// Errors from lookups outside the fixed attribute domains.
#[derive(Debug, thiserror::Error)]
pub enum SpaceError {
    #[error("Unknown attribute: {name}")]
    UnknownAttribute { name: String },

    #[error("Unknown level {value} for attribute {attribute}")]
    UnknownLevel { attribute: Attribute, value: String },
}

impl ErrorCode for SpaceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAttribute { .. } => error_code::UNKNOWN_ATTRIBUTE,
            Self::UnknownLevel { .. } => error_code::UNKNOWN_LEVEL,
        }
    }
}
