//! OTForge - Ranking Inference for Optimality Theory in Rust
//!
//! Build a linguistic system, pick a loser selection strategy in
//! configuration, and let MRCD collect the ranking information your
//! winners imply.
//!
//! # Example
//!
//! ```rust
//! use otforge::prelude::*;
//!
//! let constraints = ConstraintList::from_specs([
//!     ("NoCoda", ConstraintKind::Markedness),
//!     ("Max", ConstraintKind::Faithfulness),
//! ]).unwrap();
//! let winner = Candidate::new("pat", "pat", vec![1, 0]);
//! let system = TableSystem::new(constraints)
//!     .with_competition("pat", vec![winner.clone(), Candidate::new("pat", "pa", vec![0, 1])])
//!     .unwrap();
//!
//! let learner = Learner::new(LearnerConfig::default(), system).unwrap();
//! let result = learner.run_mrcd(&[winner], &learner.new_grammar()).unwrap();
//!
//! assert!(result.is_consistent());
//! assert_eq!(result.grammar().hierarchy_with(&AllRankable).unwrap().hierarchy().to_string(), "[Max] [NoCoda]");
//! ```

// Core model
pub use otforge_core::{
    Candidate, Constraint, ConstraintKind, ConstraintList, Erc, Label, OtForgeError, Result,
    WlPair,
};

// Ranking
pub use otforge_ranking::{
    AllRankable, ErcList, Grammar, Hierarchy, RankingBiasSomeLow, Rcd, RcdState, StratumChoice,
};

// Learning
pub use otforge_learner::{
    consistent_options, find_rescues, CandidateComparer, ComparerBuilder, Comparison,
    ConsistencyComparer, CtieComparer, FnSystem, GenLoserSelector, LinguisticSystem,
    LoserSelection, LoserSelector, Mrcd, MrcdResult, MrcdSingle, MrcdSingleResult, PairBuilder,
    PoolComparer, RankingInfo, SearchOutcome, StratumChoiceBuilder, TableSystem,
};

// Configuration
pub use otforge_config::{
    ConfigError, LearnerConfig, LoserSelectionType, RankingBiasConfig, SomeLowConfig,
};

mod learner;
pub mod logging;

pub use learner::Learner;

pub mod prelude {
    pub use super::{
        Candidate, Constraint, ConstraintKind, ConstraintList, Erc, Label, OtForgeError, WlPair,
    };
    pub use super::{AllRankable, Grammar, Hierarchy, RankingBiasSomeLow, StratumChoice};
    pub use super::{
        ConsistencyComparer, CtieComparer, FnSystem, LinguisticSystem, Mrcd, MrcdSingle,
        PoolComparer, SearchOutcome, TableSystem,
    };
    pub use super::{LearnerConfig, LoserSelectionType, RankingBiasConfig};
    pub use super::Learner;
}
