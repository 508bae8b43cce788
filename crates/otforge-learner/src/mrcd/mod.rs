//! Multi-Recursive Constraint Demotion.
//!
//! [`MrcdSingle`] collects informative losers for one winner. [`Mrcd`] runs
//! it over a whole winner list, pass after pass, until a pass adds nothing
//! or the grammar becomes inconsistent.
//!
//! Both work on a duplicate of the caller's grammar; the caller's grammar
//! and winner list are never changed, so a failed branch can simply be
//! dropped.

mod single;

use otforge_core::{Candidate, Erc, Result, WlPair};
use otforge_ranking::Grammar;
use tracing::{debug, info};

use crate::selector::LoserSelection;

pub use single::{MrcdSingle, MrcdSingleResult};

/// Builds the winner-loser pair (and its ERC) for a selected loser.
pub trait PairBuilder: Send + Sync {
    fn build(&self, winner: &Candidate, loser: &Candidate) -> Result<WlPair>;
}

impl<F> PairBuilder for F
where
    F: Fn(&Candidate, &Candidate) -> Result<WlPair> + Send + Sync,
{
    fn build(&self, winner: &Candidate, loser: &Candidate) -> Result<WlPair> {
        self(winner, loser)
    }
}

/// Result of an [`Mrcd`] run.
#[derive(Debug, Clone)]
pub struct MrcdResult {
    added_pairs: Vec<WlPair>,
    grammar: Grammar,
    added_per_pass: Vec<usize>,
}

impl MrcdResult {
    /// Every pair constructed during the run, in construction order.
    pub fn added_pairs(&self) -> &[WlPair] {
        &self.added_pairs
    }

    pub fn added_ercs(&self) -> impl Iterator<Item = &Erc> {
        self.added_pairs.iter().map(WlPair::erc)
    }

    pub fn any_change(&self) -> bool {
        !self.added_pairs.is_empty()
    }

    pub fn is_consistent(&self) -> bool {
        self.grammar.is_consistent()
    }

    /// The working grammar: the input grammar plus every added ERC.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn into_grammar(self) -> Grammar {
        self.grammar
    }

    /// Number of passes over the winner list, including the final one
    /// that added nothing (if reached).
    pub fn passes(&self) -> usize {
        self.added_per_pass.len()
    }

    /// Number of pairs added by each pass, in pass order.
    ///
    /// `added_pairs` is the concatenation of the passes, so the first
    /// `added_per_pass[..k].iter().sum()` pairs are exactly those of the first
    /// `k` passes.
    pub fn added_per_pass(&self) -> &[usize] {
        &self.added_per_pass
    }
}

/// Runs MRCD to a fixpoint over a winner list.
///
/// # Example
///
/// ```
/// use otforge_core::{Candidate, ConstraintKind, ConstraintList};
/// use otforge_learner::{ConsistencyComparer, GenLoserSelector, Mrcd, TableSystem};
/// use otforge_ranking::Grammar;
///
/// let constraints = ConstraintList::from_specs([
///     ("NoCoda", ConstraintKind::Markedness),
///     ("Max", ConstraintKind::Faithfulness),
/// ]).unwrap();
/// let winner = Candidate::new("pat", "pat", vec![1, 0]);
/// let system = TableSystem::new(constraints.clone())
///     .with_competition("pat", vec![winner.clone(), Candidate::new("pat", "pa", vec![0, 1])])
///     .unwrap();
///
/// let selector = GenLoserSelector::new(&system, ConsistencyComparer);
/// let grammar = Grammar::new(constraints);
/// let result = Mrcd::run(&[winner], &grammar, &selector).unwrap();
///
/// assert!(result.any_change());
/// assert!(result.is_consistent());
/// assert_eq!(result.added_ercs().next().unwrap().to_string(), "L W");
/// assert!(grammar.erc_list().is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Mrcd;

impl Mrcd {
    /// Runs MRCD with the default pair builder ([`WlPair::new`]).
    ///
    /// # Errors
    ///
    /// Returns an error only for malformed input, such as a winner whose
    /// violation profile does not match the grammar's constraints.
    pub fn run<S>(winners: &[Candidate], grammar: &Grammar, selector: &S) -> Result<MrcdResult>
    where
        S: LoserSelection + ?Sized,
    {
        Self::run_with_builder(winners, grammar, selector, &WlPair::new)
    }

    /// Runs MRCD with a custom pair builder.
    pub fn run_with_builder<S, B>(
        winners: &[Candidate],
        grammar: &Grammar,
        selector: &S,
        builder: &B,
    ) -> Result<MrcdResult>
    where
        S: LoserSelection + ?Sized,
        B: PairBuilder + ?Sized,
    {
        let mut working = grammar.dup();
        let mut added_pairs = Vec::new();
        let mut added_per_pass = Vec::new();

        'passes: loop {
            let pass = added_per_pass.len() + 1;
            let mut pass_added = 0;
            debug!(event = "pass_start", pass = pass, winners = winners.len());

            for winner in winners {
                let single = MrcdSingle::run_with_builder(winner, &working, selector, builder)?;
                pass_added += single.added_pairs().len();
                let (pairs, grammar) = single.into_parts();
                added_pairs.extend(pairs);
                working = grammar;
                if !working.is_consistent() {
                    debug!(event = "pass_end", pass = pass, added = pass_added);
                    added_per_pass.push(pass_added);
                    break 'passes;
                }
            }

            debug!(event = "pass_end", pass = pass, added = pass_added);
            added_per_pass.push(pass_added);
            if pass_added == 0 {
                break;
            }
        }

        info!(
            event = "mrcd_end",
            passes = added_per_pass.len(),
            added = added_pairs.len(),
            ercs = working.erc_list().len(),
            consistent = working.is_consistent(),
        );

        Ok(MrcdResult {
            added_pairs,
            grammar: working,
            added_per_pass,
        })
    }
}
