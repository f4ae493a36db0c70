//! Share-estimation configuration.

use serde::{Deserialize, Serialize};

/// How predicted shares are rounded to whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round each share to the nearest percent independently, ties to even.
    /// Totals may land on 99 or 101.
    #[default]
    Independent,
    /// Largest-remainder apportionment: totals are exactly 100.
    LargestRemainder,
}

/// Configuration for the share estimator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShareConfig {
    /// Rounding mode for output percentages. Default: independent.
    pub rounding: Option<RoundingMode>,
}

impl ShareConfig {
    /// Returns the effective rounding mode, defaulting to independent.
    pub fn effective_rounding(&self) -> RoundingMode {
        self.rounding.unwrap_or_default()
    }
}
