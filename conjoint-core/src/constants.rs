//! Shared constants for the conjoint choice engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of simulated respondents.
pub const DEFAULT_RESPONDENTS: u32 = 200;

/// Default number of choice tasks per respondent.
pub const DEFAULT_TASKS_PER_RESPONDENT: u32 = 8;

/// Number of candidate options presented in every choice task.
pub const OPTIONS_PER_TASK: usize = 3;

/// Default amplitude of the per-option uniform utility noise term.
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 1.0;

/// Number of product attributes under study.
pub const ATTRIBUTE_COUNT: usize = 4;

// ---- Attribute Importance ----
// Relative importance weights (percent) surfaced on the overview panel.

/// Importance weight of the price attribute.
pub const IMPORTANCE_PRICE: u32 = 45;

/// Importance weight of the ad-tier attribute.
pub const IMPORTANCE_ADS: u32 = 25;

/// Importance weight of the quality attribute.
pub const IMPORTANCE_QUALITY: u32 = 20;

/// Importance weight of the screen-count attribute.
pub const IMPORTANCE_SCREENS: u32 = 10;
