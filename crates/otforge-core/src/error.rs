//! Error types for OTForge

use thiserror::Error;

/// Main error type for OTForge operations.
///
/// Every variant signals malformed input from a collaborator. Ranking
/// inconsistency is never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtForgeError {
    /// Two candidates were compared with violation profiles of different lengths.
    #[error("Violation count mismatch: expected {expected} constraints, found {found}")]
    ViolationCountMismatch { expected: usize, found: usize },

    /// An ERC does not have exactly one label per constraint.
    #[error("ERC length mismatch: expected {expected} labels, found {found}")]
    ErcLengthMismatch { expected: usize, found: usize },

    /// A constraint's index does not match its position in the list.
    #[error("Constraint '{name}' has index {index} but sits at position {position}")]
    ConstraintIndex {
        name: String,
        index: usize,
        position: usize,
    },

    /// Two constraints in one list share a name.
    #[error("Duplicate constraint name: {0}")]
    DuplicateConstraint(String),

    /// Gen does not produce the winner for its own input.
    #[error("Winner /{input}/ -> [{output}] is not in its competition")]
    WinnerNotInCompetition { input: String, output: String },

    /// A character that is not one of `W`, `L`, `e`.
    #[error("Invalid ERC label: {0:?}")]
    InvalidLabel(char),

    /// Error in learner configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for OTForge operations
pub type Result<T> = std::result::Result<T, OtForgeError>;
