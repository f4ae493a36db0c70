//! Configuration system for the conjoint engine.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod conjoint_config;
pub mod share_config;
pub mod simulation_config;

pub use conjoint_config::ConjointConfig;
pub use share_config::{RoundingMode, ShareConfig};
pub use simulation_config::SimulationConfig;
