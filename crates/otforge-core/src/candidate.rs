//! Candidates and winner-loser pairs.

use std::fmt;

use crate::constraint::Constraint;
use crate::erc::Erc;
use crate::error::Result;

/// One analysis of an input: `(input, output, violation profile)`.
///
/// The violation profile holds one count per constraint, in constraint list
/// order. Candidates are read-only value objects produced by a Gen function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    input: String,
    output: String,
    violations: Vec<u32>,
}

impl Candidate {
    pub fn new(input: impl Into<String>, output: impl Into<String>, violations: Vec<u32>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            violations,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn violations(&self) -> &[u32] {
        &self.violations
    }

    /// Violation count for one constraint.
    ///
    /// # Panics
    /// Panics if the profile has no entry for the constraint.
    pub fn violations_of(&self, constraint: &Constraint) -> u32 {
        self.violations[constraint.index()]
    }

    /// True if both candidates analyse the same input as the same output.
    pub fn same_analysis(&self, other: &Candidate) -> bool {
        self.input == other.input && self.output == other.output
    }

    pub fn has_identical_violations(&self, other: &Candidate) -> bool {
        self.violations == other.violations
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/ -> [{}] {:?}", self.input, self.output, self.violations)
    }
}

/// A winner, the loser selected against it, and their ERC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WlPair {
    winner: Candidate,
    loser: Candidate,
    erc: Erc,
}

impl WlPair {
    /// Pairs a winner with a loser and builds their ERC.
    ///
    /// # Errors
    ///
    /// Returns an error if the violation profiles differ in length.
    pub fn new(winner: &Candidate, loser: &Candidate) -> Result<Self> {
        let erc = Erc::from_candidates(winner, loser)?;
        Ok(Self {
            winner: winner.clone(),
            loser: loser.clone(),
            erc,
        })
    }

    pub fn winner(&self) -> &Candidate {
        &self.winner
    }

    pub fn loser(&self) -> &Candidate {
        &self.loser
    }

    pub fn erc(&self) -> &Erc {
        &self.erc
    }
}

impl fmt::Display for WlPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/ [{}] > [{}]: {}",
            self.winner.input(),
            self.winner.output(),
            self.loser.output(),
            self.erc
        )
    }
}
