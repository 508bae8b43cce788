//! OTForge Core - Core types for ranking inference in Optimality Theory
//!
//! This crate provides the fundamental abstractions for OTForge:
//! - Constraint identities and the shared constraint list
//! - Candidates with violation profiles
//! - ERCs (Evaluation of a Ranking Condition) and winner-loser pairs
//! - The error type shared by all crates

pub mod candidate;
pub mod constraint;
pub mod erc;
pub mod error;


pub use candidate::{Candidate, WlPair};
pub use constraint::{Constraint, ConstraintKind, ConstraintList};
pub use erc::{Erc, Label};
pub use error::{OtForgeError, Result};
