//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_NOISE_AMPLITUDE, DEFAULT_RESPONDENTS, DEFAULT_TASKS_PER_RESPONDENT,
};

/// Configuration for the choice simulator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of simulated respondents. Default: 200.
    pub respondents: Option<u32>,
    /// Choice tasks per respondent. Default: 8.
    pub tasks_per_respondent: Option<u32>,
    /// Amplitude of the per-option uniform noise term. Default: 1.0.
    pub noise_amplitude: Option<f64>,
    /// Seed for reproducible generation (None = non-deterministic).
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Returns the effective respondent count, defaulting to 200.
    pub fn effective_respondents(&self) -> u32 {
        self.respondents.unwrap_or(DEFAULT_RESPONDENTS)
    }

    /// Returns the effective tasks per respondent, defaulting to 8.
    pub fn effective_tasks_per_respondent(&self) -> u32 {
        self.tasks_per_respondent.unwrap_or(DEFAULT_TASKS_PER_RESPONDENT)
    }

    /// Returns the effective noise amplitude, defaulting to 1.0.
    pub fn effective_noise_amplitude(&self) -> f64 {
        self.noise_amplitude.unwrap_or(DEFAULT_NOISE_AMPLITUDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_panel() {
        let config = SimulationConfig::default();
        assert_eq!(config.effective_respondents(), 200);
        assert_eq!(config.effective_tasks_per_respondent(), 8);
        assert_eq!(config.effective_noise_amplitude(), 1.0);
        assert!(config.seed.is_none());
    }
}
