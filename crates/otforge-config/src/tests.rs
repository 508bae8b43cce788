//! Tests for learner configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        loser_selection = "ctie"

        [ranking_bias]
        type = "some_low"
        low_kind = "markedness"
    "#;

    let config = LearnerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.loser_selection, LoserSelectionType::Ctie);
    assert_eq!(config.ranking_bias, RankingBiasConfig::markedness_low());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        loser_selection: pool
        ranking_bias:
          type: some_low
          low_kind: faithfulness
    "#;

    let config = LearnerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.loser_selection, LoserSelectionType::Pool);
    assert_eq!(
        config.ranking_bias.low_kind(),
        Some(ConstraintKind::Faithfulness)
    );
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = LearnerConfig::from_toml_str("").unwrap();
    assert_eq!(config, LearnerConfig::default());
    assert_eq!(config.loser_selection, LoserSelectionType::Consistency);
    assert!(config.ranking_bias.is_all_rankable());
}

#[test]
fn test_some_low_defaults_to_faithfulness() {
    let toml = r#"
        loser_selection = "pool"

        [ranking_bias]
        type = "some_low"
    "#;

    let config = LearnerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.ranking_bias, RankingBiasConfig::faithfulness_low());
}

#[test]
fn test_unknown_strategy_rejected() {
    let err = LearnerConfig::from_toml_str(r#"loser_selection = "greedy""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_unknown_field_rejected() {
    let err = LearnerConfig::from_yaml_str("loser_selecton: pool\n").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn test_bias_with_consistency_is_invalid() {
    let toml = r#"
        [ranking_bias]
        type = "some_low"
    "#;

    let err = LearnerConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().starts_with("Invalid configuration"));
}

#[test]
fn test_builder() {
    let config = LearnerConfig::new()
        .with_loser_selection(LoserSelectionType::Pool)
        .with_ranking_bias(RankingBiasConfig::faithfulness_low());

    assert_eq!(config.loser_selection, LoserSelectionType::Pool);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file() {
    let err = LearnerConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_toml_round_trip() {
    let config = LearnerConfig::new()
        .with_loser_selection(LoserSelectionType::Ctie)
        .with_ranking_bias(RankingBiasConfig::markedness_low());
    let text = toml::to_string(&config).unwrap();
    assert_eq!(LearnerConfig::from_toml_str(&text).unwrap(), config);
}
