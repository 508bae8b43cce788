//! Ranking inference for OTForge.
//!
//! This crate provides:
//! - Recursive Constraint Demotion ([`Rcd`]) over a list of ERCs
//! - Constraint hierarchies ([`Hierarchy`])
//! - Stratum choice policies, including the faithfulness-low bias
//!   ([`RankingBiasSomeLow`])
//! - Append-only ERC lists and grammars with a cached consistency verdict
//!
//! # Example
//!
//! ```
//! use otforge_core::{ConstraintKind, ConstraintList, Erc};
//! use otforge_ranking::Rcd;
//!
//! let constraints = ConstraintList::from_specs([
//!     ("C1", ConstraintKind::Markedness),
//!     ("C2", ConstraintKind::Markedness),
//!     ("C3", ConstraintKind::Markedness),
//! ]).unwrap();
//! let ercs = vec![
//!     Erc::parse("WLe").unwrap(),
//!     Erc::parse("eWL").unwrap(),
//!     Erc::parse("eeW").unwrap(),
//! ];
//!
//! let rcd = Rcd::run(&constraints, &ercs).unwrap();
//! assert!(rcd.is_consistent());
//! assert_eq!(rcd.hierarchy().to_string(), "[C1] [C2] [C3]");
//! ```

pub mod bias;
pub mod grammar;
pub mod hierarchy;
pub mod rcd;

pub use bias::{AllRankable, RankingBiasSomeLow, StratumChoice};
pub use grammar::{ErcList, Grammar};
pub use hierarchy::Hierarchy;
pub use rcd::{Rcd, RcdState};
