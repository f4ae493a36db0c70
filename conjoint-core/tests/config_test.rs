//! Tests for the configuration system.

use conjoint_core::config::{ConjointConfig, RoundingMode};
use conjoint_core::errors::ConfigError;

#[test]
fn test_defaults_match_reference_behavior() {
    let config = ConjointConfig::default();
    assert_eq!(config.simulation.effective_respondents(), 200);
    assert_eq!(config.simulation.effective_tasks_per_respondent(), 8);
    assert_eq!(config.simulation.effective_noise_amplitude(), 1.0);
    assert_eq!(config.shares.effective_rounding(), RoundingMode::Independent);
}

#[test]
fn test_from_toml_overrides_only_named_fields() {
    let config = ConjointConfig::from_toml(
        r#"
        [simulation]
        respondents = 500
        seed = 42

        [shares]
        rounding = "largest_remainder"
        "#,
    )
    .unwrap();

    assert_eq!(config.simulation.effective_respondents(), 500);
    assert_eq!(config.simulation.effective_tasks_per_respondent(), 8);
    assert_eq!(config.simulation.seed, Some(42));
    assert_eq!(config.shares.effective_rounding(), RoundingMode::LargestRemainder);
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let err = ConjointConfig::from_toml("simulation = 3").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validate_rejects_zero_counts() {
    let config = ConjointConfig::from_toml("[simulation]\nrespondents = 0").unwrap();
    let err = ConjointConfig::validate(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { field, .. } if field == "simulation.respondents"
    ));

    let config = ConjointConfig::from_toml("[simulation]\ntasks_per_respondent = 0").unwrap();
    assert!(ConjointConfig::validate(&config).is_err());
}

#[test]
fn test_validate_rejects_non_positive_noise() {
    let config = ConjointConfig::from_toml("[simulation]\nnoise_amplitude = -1.0").unwrap();
    let err = ConjointConfig::validate(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { field, .. } if field == "simulation.noise_amplitude"
    ));
}

#[test]
fn test_load_merges_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("conjoint.toml"),
        "[simulation]\ntasks_per_respondent = 10\n",
    )
    .unwrap();

    let config = ConjointConfig::load(dir.path()).unwrap();
    assert_eq!(config.simulation.effective_tasks_per_respondent(), 10);
    assert_eq!(config.simulation.effective_respondents(), 200);
}

#[test]
fn test_load_without_project_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConjointConfig::load(dir.path()).unwrap();
    assert_eq!(config.simulation.effective_respondents(), 200);
}

#[test]
fn test_env_override_wins_over_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("conjoint.toml"), "[simulation]\nseed = 1\n").unwrap();

    std::env::set_var("CONJOINT_SEED", "99");
    let config = ConjointConfig::load(dir.path());
    std::env::remove_var("CONJOINT_SEED");

    assert_eq!(config.unwrap().simulation.seed, Some(99));
}

#[test]
fn test_toml_round_trip() {
    let original = ConjointConfig::from_toml(
        "[simulation]\nrespondents = 300\n[shares]\nrounding = \"independent\"\n",
    )
    .unwrap();
    let serialized = original.to_toml().unwrap();
    let reparsed = ConjointConfig::from_toml(&serialized).unwrap();
    assert_eq!(reparsed.simulation.respondents, Some(300));
    assert_eq!(reparsed.shares.rounding, Some(RoundingMode::Independent));
}
