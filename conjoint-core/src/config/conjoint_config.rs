//! Top-level engine configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::share_config::RoundingMode;
use super::{ShareConfig, SimulationConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CONJOINT_*`)
/// 2. Project config (`conjoint.toml` in the session root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConjointConfig {
    pub simulation: SimulationConfig,
    pub shares: ShareConfig,
}

impl ConjointConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_path = root.join("conjoint.toml");
        if project_path.exists() {
            Self::merge_toml_file(&mut config, &project_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ConjointConfig) -> Result<(), ConfigError> {
        if let Some(respondents) = config.simulation.respondents {
            if respondents == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.respondents".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(tasks) = config.simulation.tasks_per_respondent {
            if tasks == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.tasks_per_respondent".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(amplitude) = config.simulation.noise_amplitude {
            if !amplitude.is_finite() || amplitude <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.noise_amplitude".to_string(),
                    message: "must be positive and finite".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ConjointConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: ConjointConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ConjointConfig, other: &ConjointConfig) {
        if other.simulation.respondents.is_some() {
            base.simulation.respondents = other.simulation.respondents;
        }
        if other.simulation.tasks_per_respondent.is_some() {
            base.simulation.tasks_per_respondent = other.simulation.tasks_per_respondent;
        }
        if other.simulation.noise_amplitude.is_some() {
            base.simulation.noise_amplitude = other.simulation.noise_amplitude;
        }
        if other.simulation.seed.is_some() {
            base.simulation.seed = other.simulation.seed;
        }
        if other.shares.rounding.is_some() {
            base.shares.rounding = other.shares.rounding;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CONJOINT_RESPONDENTS`, `CONJOINT_TASKS_PER_RESPONDENT`, etc.
    fn apply_env_overrides(config: &mut ConjointConfig) {
        if let Ok(val) = std::env::var("CONJOINT_RESPONDENTS") {
            if let Ok(v) = val.parse::<u32>() {
                config.simulation.respondents = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONJOINT_TASKS_PER_RESPONDENT") {
            if let Ok(v) = val.parse::<u32>() {
                config.simulation.tasks_per_respondent = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONJOINT_NOISE_AMPLITUDE") {
            if let Ok(v) = val.parse::<f64>() {
                config.simulation.noise_amplitude = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONJOINT_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.simulation.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONJOINT_ROUNDING") {
            match val.as_str() {
                "independent" => config.shares.rounding = Some(RoundingMode::Independent),
                "largest_remainder" => {
                    config.shares.rounding = Some(RoundingMode::LargestRemainder)
                }
                _ => {}
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
