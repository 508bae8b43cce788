//! Configuration system for the OTForge learner.
//!
//! Load learner configuration from TOML or YAML to choose the loser
//! selection strategy and the ranking bias without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use otforge_config::{LearnerConfig, LoserSelectionType, RankingBiasConfig};
//! use otforge_core::ConstraintKind;
//!
//! let config = LearnerConfig::from_toml_str(r#"
//!     loser_selection = "pool"
//!
//!     [ranking_bias]
//!     type = "some_low"
//!     low_kind = "faithfulness"
//! "#).unwrap();
//!
//! assert_eq!(config.loser_selection, LoserSelectionType::Pool);
//! assert_eq!(config.ranking_bias.low_kind(), Some(ConstraintKind::Faithfulness));
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use otforge_config::LearnerConfig;
//!
//! let config = LearnerConfig::load("learner.toml").unwrap_or_default();
//! assert!(config.ranking_bias.is_all_rankable());
//! ```

use std::path::Path;

use otforge_core::ConstraintKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Learner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct LearnerConfig {
    /// How the learner picks an informative loser for a winner.
    #[serde(default)]
    pub loser_selection: LoserSelectionType,

    /// Stratum choice used when comparers build a hierarchy.
    #[serde(default)]
    pub ranking_bias: RankingBiasConfig,
}

impl LearnerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the loser selection strategy.
    pub fn with_loser_selection(mut self, loser_selection: LoserSelectionType) -> Self {
        self.loser_selection = loser_selection;
        self
    }

    /// Sets the ranking bias.
    pub fn with_ranking_bias(mut self, ranking_bias: RankingBiasConfig) -> Self {
        self.ranking_bias = ranking_bias;
        self
    }

    /// Checks combinations serde cannot reject on its own.
    ///
    /// The consistency comparer never builds a hierarchy, so a ranking bias
    /// paired with it would be silently ignored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loser_selection == LoserSelectionType::Consistency
            && !self.ranking_bias.is_all_rankable()
        {
            return Err(ConfigError::Invalid(
                "ranking_bias has no effect with loser_selection = \"consistency\"".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loser selection strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoserSelectionType {
    /// Select a competitor some ranking consistent with the grammar prefers.
    #[default]
    Consistency,

    /// Compare pooled violations stratum by stratum.
    Pool,

    /// Treat conflicts inside a stratum as ties.
    Ctie,
}

/// Ranking bias for hierarchy construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RankingBiasConfig {
    /// Place every rankable constraint in the next stratum.
    #[default]
    AllRankable,

    /// Keep constraints of one kind low for as long as possible.
    SomeLow(SomeLowConfig),
}

impl RankingBiasConfig {
    /// Faithfulness low, markedness high.
    pub fn faithfulness_low() -> Self {
        RankingBiasConfig::SomeLow(SomeLowConfig {
            low_kind: ConstraintKind::Faithfulness,
        })
    }

    /// Markedness low, faithfulness high.
    pub fn markedness_low() -> Self {
        RankingBiasConfig::SomeLow(SomeLowConfig {
            low_kind: ConstraintKind::Markedness,
        })
    }

    pub fn is_all_rankable(&self) -> bool {
        matches!(self, RankingBiasConfig::AllRankable)
    }

    /// The kind kept low, if any.
    pub fn low_kind(&self) -> Option<ConstraintKind> {
        match self {
            RankingBiasConfig::AllRankable => None,
            RankingBiasConfig::SomeLow(c) => Some(c.low_kind),
        }
    }
}

/// Settings for the some-low bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SomeLowConfig {
    /// Constraint kind kept low.
    #[serde(default = "default_low_kind")]
    pub low_kind: ConstraintKind,
}

impl Default for SomeLowConfig {
    fn default() -> Self {
        Self {
            low_kind: default_low_kind(),
        }
    }
}

fn default_low_kind() -> ConstraintKind {
    ConstraintKind::Faithfulness
}

#[cfg(test)]
mod tests;
