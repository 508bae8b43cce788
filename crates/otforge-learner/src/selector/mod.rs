//! Loser selection.
//!
//! Given a winner, its competition and the current grammar, a loser
//! selector returns the first competitor whose ERC against the winner would
//! be informative, or `None` when the winner already beats every competitor
//! under the comparer's criterion.
//!
//! Selection follows competition order and returns the first qualifying
//! competitor. Reproducible learning runs depend on that order.
//!
//! # Comparers
//!
//! - [`PoolComparer`] - pooled violations per stratum of an RCD hierarchy
//! - [`CtieComparer`] - conflicts within a stratum count as ties
//! - [`ConsistencyComparer`] - can any consistent ranking prefer the competitor?

mod consistency;
mod ctie;
mod pool;

use std::cell::OnceCell;
use std::fmt::Debug;

use otforge_core::{Candidate, OtForgeError, Result};
use otforge_ranking::{AllRankable, Grammar, Hierarchy, StratumChoice};
use tracing::trace;

use crate::system::LinguisticSystem;

pub use consistency::ConsistencyComparer;
pub use ctie::CtieComparer;
pub use pool::PoolComparer;

/// Outcome of comparing a winner with one competitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The winner is preferred.
    Winner,
    /// The competitor is preferred.
    Competitor,
    /// Neither is preferred; the competitor could tie or beat the winner.
    Tie,
    /// Both have the same violation profile; their ERC carries no information.
    IdenticalViolations,
}

impl Comparison {
    /// True if the competitor should be returned as a loser.
    pub fn selects_competitor(self) -> bool {
        matches!(self, Comparison::Competitor | Comparison::Tie)
    }
}

/// Ranking information available to a comparer during one selection.
///
/// The hierarchy is built on first use with the comparer's policy and then
/// reused for every competitor. If the grammar is inconsistent, the
/// constraints RCD could not rank are appended as a final stratum so the
/// hierarchy covers every constraint.
#[derive(Debug)]
pub struct RankingInfo<'a> {
    grammar: &'a Grammar,
    policy: &'a dyn StratumChoice,
    hierarchy: OnceCell<Hierarchy>,
}

impl<'a> RankingInfo<'a> {
    pub fn new(grammar: &'a Grammar, policy: &'a dyn StratumChoice) -> Self {
        Self {
            grammar,
            policy,
            hierarchy: OnceCell::new(),
        }
    }

    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    /// The policy hierarchy of the grammar.
    pub fn hierarchy(&self) -> Result<&Hierarchy> {
        if let Some(hierarchy) = self.hierarchy.get() {
            return Ok(hierarchy);
        }
        let rcd = self.grammar.hierarchy_with(self.policy)?;
        let hierarchy = if rcd.is_consistent() {
            rcd.into_hierarchy()
        } else {
            let mut strata = rcd.hierarchy().strata().to_vec();
            strata.push(rcd.unranked().to_vec());
            Hierarchy::new(strata)
        };
        Ok(self.hierarchy.get_or_init(|| hierarchy))
    }
}

/// Compares a winner to a competitor under current ranking information.
pub trait CandidateComparer: Send + Sync + Debug {
    /// Policy used to build [`RankingInfo::hierarchy`].
    fn hierarchy_policy(&self) -> &dyn StratumChoice {
        &AllRankable
    }

    fn compare(
        &self,
        winner: &Candidate,
        competitor: &Candidate,
        info: &RankingInfo<'_>,
    ) -> Result<Comparison>;
}

impl<C: CandidateComparer + ?Sized> CandidateComparer for Box<C> {
    fn hierarchy_policy(&self) -> &dyn StratumChoice {
        (**self).hierarchy_policy()
    }

    fn compare(
        &self,
        winner: &Candidate,
        competitor: &Candidate,
        info: &RankingInfo<'_>,
    ) -> Result<Comparison> {
        (**self).compare(winner, competitor, info)
    }
}

impl<C: CandidateComparer + ?Sized> CandidateComparer for &C {
    fn hierarchy_policy(&self) -> &dyn StratumChoice {
        (**self).hierarchy_policy()
    }

    fn compare(
        &self,
        winner: &Candidate,
        competitor: &Candidate,
        info: &RankingInfo<'_>,
    ) -> Result<Comparison> {
        (**self).compare(winner, competitor, info)
    }
}

/// Selects at most one loser for a winner against the current grammar.
pub trait LoserSelection: Send + Sync {
    fn select_loser(&self, winner: &Candidate, grammar: &Grammar) -> Result<Option<Candidate>>;
}

/// Selects the first informative loser from an explicit competition.
///
/// # Example
///
/// ```
/// use otforge_core::{Candidate, ConstraintKind, ConstraintList};
/// use otforge_learner::{ConsistencyComparer, LoserSelector};
/// use otforge_ranking::Grammar;
///
/// let constraints = ConstraintList::from_specs([
///     ("NoCoda", ConstraintKind::Markedness),
///     ("Max", ConstraintKind::Faithfulness),
/// ]).unwrap();
/// let winner = Candidate::new("pat", "pat", vec![1, 0]);
/// let competition = vec![winner.clone(), Candidate::new("pat", "pa", vec![0, 1])];
///
/// let selector = LoserSelector::new(ConsistencyComparer);
/// let loser = selector
///     .select_loser_from(&winner, &competition, &Grammar::new(constraints))
///     .unwrap();
/// assert_eq!(loser.map(|c| c.output().to_string()), Some("pa".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct LoserSelector<C> {
    comparer: C,
}

impl<C: CandidateComparer> LoserSelector<C> {
    pub fn new(comparer: C) -> Self {
        Self { comparer }
    }

    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Returns the first competitor the comparer does not rule out.
    ///
    /// The winner itself (same input and output) is skipped, as are
    /// competitors with the winner's exact violation profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the winner or a competitor has a violation
    /// profile that does not match the grammar's constraint list.
    pub fn select_loser_from(
        &self,
        winner: &Candidate,
        competition: &[Candidate],
        grammar: &Grammar,
    ) -> Result<Option<Candidate>> {
        let expected = grammar.constraints().len();
        check_profile(winner, expected)?;
        let info = RankingInfo::new(grammar, self.comparer.hierarchy_policy());

        for competitor in competition {
            if competitor.same_analysis(winner) {
                continue;
            }
            check_profile(competitor, expected)?;
            let comparison = self.comparer.compare(winner, competitor, &info)?;
            trace!(
                event = "compare",
                winner = winner.output(),
                competitor = competitor.output(),
                comparison = ?comparison,
            );
            if comparison.selects_competitor() {
                return Ok(Some(competitor.clone()));
            }
        }
        Ok(None)
    }
}

fn check_profile(candidate: &Candidate, expected: usize) -> Result<()> {
    let found = candidate.violations().len();
    if found != expected {
        return Err(OtForgeError::ViolationCountMismatch { expected, found });
    }
    Ok(())
}

/// Loser selection over the competition Gen produces for the winner's input.
///
/// A winner missing from that competition is malformed input and is
/// reported as [`OtForgeError::WinnerNotInCompetition`].
#[derive(Debug, Clone)]
pub struct GenLoserSelector<Sys, C> {
    system: Sys,
    selector: LoserSelector<C>,
}

impl<Sys, C> GenLoserSelector<Sys, C>
where
    Sys: LinguisticSystem,
    C: CandidateComparer,
{
    pub fn new(system: Sys, comparer: C) -> Self {
        Self {
            system,
            selector: LoserSelector::new(comparer),
        }
    }

    pub fn system(&self) -> &Sys {
        &self.system
    }

    pub fn selector(&self) -> &LoserSelector<C> {
        &self.selector
    }
}

impl<Sys, C> LoserSelection for GenLoserSelector<Sys, C>
where
    Sys: LinguisticSystem,
    C: CandidateComparer,
{
    fn select_loser(&self, winner: &Candidate, grammar: &Grammar) -> Result<Option<Candidate>> {
        let competition = self.system.competition(winner.input());
        if !competition.iter().any(|c| c.same_analysis(winner)) {
            return Err(OtForgeError::WinnerNotInCompetition {
                input: winner.input().to_string(),
                output: winner.output().to_string(),
            });
        }
        self.selector
            .select_loser_from(winner, &competition, grammar)
    }
}
