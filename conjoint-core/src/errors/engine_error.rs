//! Top-level engine errors.

use super::error_code::ErrorCode;
use super::{ConfigError, EstimateError, SimulationError, SpaceError};

/// Errors surfaced to presentation collaborators.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Estimation error: {0}")]
    Estimate(#[from] EstimateError),

    #[error("Attribute space error: {0}")]
    Space(#[from] SpaceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Simulation(e) => e.error_code(),
            Self::Estimate(e) => e.error_code(),
            Self::Space(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
