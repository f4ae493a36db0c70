//! The logit share estimator.

use tracing::debug;

use conjoint_core::config::{RoundingMode, ShareConfig};
use conjoint_core::errors::EstimateError;
use conjoint_core::space::AttributeSpace;

use super::types::{Scenario, ScenarioShare};

/// Converts scenario configurations into normalized percentage shares.
///
/// Utility per scenario is the deterministic sum of part-worths, no noise.
/// Shares weight each scenario by `exp(utility)` and normalize across the
/// set. The maximum utility is subtracted before exponentiating; this leaves
/// the normalized shares unchanged and keeps `exp` bounded if utility ranges
/// ever grow.
pub struct ShareEstimator {
    rounding: RoundingMode,
}

impl ShareEstimator {
    /// Create an estimator with the default independent rounding.
    pub fn new() -> Self {
        Self {
            rounding: RoundingMode::default(),
        }
    }

    /// Create an estimator from configuration.
    pub fn from_config(config: &ShareConfig) -> Self {
        Self {
            rounding: config.effective_rounding(),
        }
    }

    /// Override the rounding mode.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Predict market shares for the given scenarios.
    ///
    /// Output order mirrors input order, one share per scenario. Fails on an
    /// empty set, an incomplete scenario, or an out-of-domain level.
    pub fn estimate(
        &self,
        space: &AttributeSpace,
        scenarios: &[Scenario],
    ) -> Result<Vec<ScenarioShare>, EstimateError> {
        if scenarios.is_empty() {
            return Err(EstimateError::EmptyScenarioSet);
        }

        let mut utilities = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            let profile = scenario.profile()?;
            utilities.push(space.profile_utility(&profile)?);
        }

        let max_utility = utilities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = utilities.iter().map(|u| (u - max_utility).exp()).collect();
        let total: f64 = weights.iter().sum();

        let exact: Vec<f64> = weights.iter().map(|w| w / total * 100.0).collect();
        let percentages = match self.rounding {
            RoundingMode::Independent => round_independent(&exact),
            RoundingMode::LargestRemainder => round_largest_remainder(&exact),
        };

        debug!(scenarios = scenarios.len(), "estimated market shares");

        Ok(scenarios
            .iter()
            .zip(percentages)
            .map(|(scenario, percentage)| ScenarioShare {
                name: scenario.name.clone(),
                percentage,
            })
            .collect())
    }
}

impl Default for ShareEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Round each share to the nearest whole percent, ties to even.
/// Totals may land on 99 or 101; callers wanting an exact 100 use
/// largest-remainder rounding instead.
fn round_independent(exact: &[f64]) -> Vec<u32> {
    exact.iter().map(|share| share.round_ties_even() as u32).collect()
}

/// Largest-remainder apportionment to a total of exactly 100.
///
/// Floors every share, then hands the remaining points to the largest
/// fractional remainders; the earlier input index wins remainder ties.
fn round_largest_remainder(exact: &[f64]) -> Vec<u32> {
    let floors: Vec<u32> = exact.iter().map(|share| share.floor() as u32).collect();
    let assigned: u32 = floors.iter().sum();
    let mut shortfall = 100u32.saturating_sub(assigned);

    let mut order: Vec<usize> = (0..exact.len()).collect();
    order.sort_by(|&a, &b| {
        let remainder_a = exact[a] - exact[a].floor();
        let remainder_b = exact[b] - exact[b].floor();
        remainder_b
            .partial_cmp(&remainder_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut result = floors;
    for index in order {
        if shortfall == 0 {
            break;
        }
        result[index] += 1;
        shortfall -= 1;
    }
    result
}
