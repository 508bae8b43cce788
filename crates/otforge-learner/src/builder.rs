//! Builder module for constructing learner components from configuration
//!
//! This module provides the wiring between configuration types and the
//! comparers and stratum choices used during learning.

use otforge_config::{LearnerConfig, LoserSelectionType, RankingBiasConfig};
use otforge_core::ConstraintKind;
use otforge_ranking::{AllRankable, RankingBiasSomeLow, StratumChoice};
use tracing::{debug, warn};

use crate::selector::{CandidateComparer, ConsistencyComparer, CtieComparer, PoolComparer};

/// Builder for constructing stratum choices from configuration.
pub struct StratumChoiceBuilder;

impl StratumChoiceBuilder {
    /// Builds a stratum choice from configuration.
    pub fn build(config: &RankingBiasConfig) -> Box<dyn StratumChoice> {
        match config.low_kind() {
            None => Box::new(AllRankable),
            Some(ConstraintKind::Faithfulness) => Box::new(RankingBiasSomeLow::faithfulness_low()),
            Some(ConstraintKind::Markedness) => Box::new(RankingBiasSomeLow::markedness_low()),
        }
    }
}

/// Builder for constructing comparers from configuration.
pub struct ComparerBuilder;

impl ComparerBuilder {
    /// Builds a comparer from configuration.
    ///
    /// The consistency comparer does not build a hierarchy, so the ranking
    /// bias only applies to pool and ctie. A bias paired with consistency is
    /// dropped with a warning; [`LearnerConfig::validate`] rejects it.
    pub fn build(config: &LearnerConfig) -> Box<dyn CandidateComparer> {
        debug!(
            event = "build_comparer",
            loser_selection = ?config.loser_selection,
            ranking_bias = ?config.ranking_bias,
        );
        match config.loser_selection {
            LoserSelectionType::Consistency => {
                if !config.ranking_bias.is_all_rankable() {
                    warn!(
                        event = "ranking_bias_ignored",
                        ranking_bias = ?config.ranking_bias,
                    );
                }
                Box::new(ConsistencyComparer)
            }
            LoserSelectionType::Pool => {
                Box::new(PoolComparer::new(StratumChoiceBuilder::build(&config.ranking_bias)))
            }
            LoserSelectionType::Ctie => {
                Box::new(CtieComparer::new(StratumChoiceBuilder::build(&config.ranking_bias)))
            }
        }
    }

    /// Creates a pool comparer without bias.
    pub fn pool() -> PoolComparer {
        PoolComparer::new(AllRankable)
    }

    /// Creates a ctie comparer without bias.
    pub fn ctie() -> CtieComparer {
        CtieComparer::new(AllRankable)
    }
}
