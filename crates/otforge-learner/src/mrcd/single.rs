//! MRCD for a single winner.

use otforge_core::{Candidate, OtForgeError, Result, WlPair};
use otforge_ranking::Grammar;
use tracing::debug;

use super::PairBuilder;
use crate::selector::LoserSelection;

/// Result of an [`MrcdSingle`] run.
#[derive(Debug, Clone)]
pub struct MrcdSingleResult {
    added_pairs: Vec<WlPair>,
    grammar: Grammar,
}

impl MrcdSingleResult {
    pub fn added_pairs(&self) -> &[WlPair] {
        &self.added_pairs
    }

    pub fn any_change(&self) -> bool {
        !self.added_pairs.is_empty()
    }

    pub fn is_consistent(&self) -> bool {
        self.grammar.is_consistent()
    }

    /// The duplicate grammar the run worked on.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn into_parts(self) -> (Vec<WlPair>, Grammar) {
        (self.added_pairs, self.grammar)
    }
}

/// Collects informative losers for one winner.
///
/// Repeatedly asks the selector for a loser and adds the winner-over-loser
/// ERC to a duplicate of the grammar, until the selector finds none or the
/// grammar becomes inconsistent.
#[derive(Debug, Clone, Copy)]
pub struct MrcdSingle;

impl MrcdSingle {
    pub fn run<S>(winner: &Candidate, grammar: &Grammar, selector: &S) -> Result<MrcdSingleResult>
    where
        S: LoserSelection + ?Sized,
    {
        Self::run_with_builder(winner, grammar, selector, &WlPair::new)
    }

    /// # Errors
    ///
    /// Returns an error if the winner's violation profile does not match the
    /// grammar's constraints, or if the selector or builder fails.
    pub fn run_with_builder<S, B>(
        winner: &Candidate,
        grammar: &Grammar,
        selector: &S,
        builder: &B,
    ) -> Result<MrcdSingleResult>
    where
        S: LoserSelection + ?Sized,
        B: PairBuilder + ?Sized,
    {
        let expected = grammar.constraints().len();
        if winner.violations().len() != expected {
            return Err(OtForgeError::ViolationCountMismatch {
                expected,
                found: winner.violations().len(),
            });
        }

        let mut working = grammar.dup();
        let mut added_pairs = Vec::new();

        while working.is_consistent() {
            let Some(loser) = selector.select_loser(winner, &working)? else {
                break;
            };
            let pair = builder.build(winner, &loser)?;
            let consistent = working.add_erc(pair.erc().clone())?;
            debug!(
                event = "erc_added",
                input = winner.input(),
                winner = winner.output(),
                loser = loser.output(),
                erc = %pair.erc(),
                consistent = consistent,
            );
            added_pairs.push(pair);
        }

        Ok(MrcdSingleResult {
            added_pairs,
            grammar: working,
        })
    }
}
