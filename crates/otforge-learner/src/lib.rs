//! OTForge learner engine
//!
//! This crate drives ranking inference from observed winners:
//! - Linguistic systems (constraint list plus Gen)
//! - Candidate comparers and loser selection
//! - MrcdSingle and Mrcd, the fixpoint that collects informative
//!   winner-loser pairs
//! - Three-way search outcomes for consistency-oracle searches
//! - Configuration wiring (builder module)

pub mod builder;
pub mod mrcd;
pub mod outcome;
pub mod selector;
pub mod system;

pub use builder::{ComparerBuilder, StratumChoiceBuilder};
pub use mrcd::{Mrcd, MrcdResult, MrcdSingle, MrcdSingleResult, PairBuilder};
pub use outcome::{consistent_options, find_rescues, SearchOutcome};
pub use selector::{
    CandidateComparer, Comparison, ConsistencyComparer, CtieComparer, GenLoserSelector,
    LoserSelection, LoserSelector, PoolComparer, RankingInfo,
};
pub use system::{FnSystem, LinguisticSystem, TableSystem};
