//! Conjoint choice-simulation and market-share engine.
//!
//! Two stateless components over the shared attribute space: a choice
//! simulator that generates a synthetic panel of discrete-choice tasks, and
//! a share estimator that converts candidate product configurations into
//! logit market-share percentages. `AnalysisSession` wraps both behind the
//! two entry points presentation collaborators use.
//!
//! # Example
//! ```
//! use conjoint_analysis::AnalysisSession;
//! use conjoint_core::config::ConjointConfig;
//!
//! let session = AnalysisSession::new(ConjointConfig::default());
//! let shares = session.estimate_current().unwrap();
//! assert_eq!(shares.len(), 2);
//! ```

pub mod session;
pub mod shares;
pub mod simulation;

pub use session::AnalysisSession;
pub use shares::{Scenario, ScenarioShare, ShareEstimator};
pub use simulation::{ChoiceOption, ChoiceSimulator, ChoiceTask, DatasetSummary};
