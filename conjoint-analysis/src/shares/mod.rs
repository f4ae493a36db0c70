//! Market-share estimation.
//!
//! Converts fully-specified scenario configurations into normalized
//! percentage shares under a multinomial-logit rule: each scenario's share
//! is proportional to the exponentiated sum of its part-worth utilities.

pub mod estimator;
pub mod types;

pub use conjoint_core::config::RoundingMode;
pub use estimator::ShareEstimator;
pub use types::{Scenario, ScenarioShare};
