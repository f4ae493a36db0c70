//! Error handling for the conjoint engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod estimate_error;
pub mod simulation_error;
pub mod space_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::ErrorCode;
pub use estimate_error::EstimateError;
pub use simulation_error::SimulationError;
pub use space_error::SpaceError;
