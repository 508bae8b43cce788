//! Recursive Constraint Demotion.
//!
//! RCD builds a hierarchy one stratum at a time. In each round a constraint
//! is rankable iff it is `L` in no unexplained ERC. The stratum choice policy
//! picks which rankable constraints form the next stratum; every unexplained
//! ERC with a `W` in that stratum becomes explained. The run stops when all
//! constraints are ranked (consistent) or when constraints remain but none is
//! rankable (inconsistent).
//!
//! Inconsistency is an ordinary outcome, reported by [`Rcd::is_consistent`].

use otforge_core::{Constraint, ConstraintList, Erc, OtForgeError, Result};
use tracing::{debug, trace};

use crate::bias::{AllRankable, StratumChoice};
use crate::hierarchy::Hierarchy;

/// The state of an RCD run at the start of a round.
///
/// Handed to [`StratumChoice`] policies so they can inspect what is still
/// unranked and unexplained.
#[derive(Debug, Clone, Copy)]
pub struct RcdState<'a> {
    unranked: &'a [Constraint],
    unexplained: &'a [Erc],
}

impl<'a> RcdState<'a> {
    pub fn new(unranked: &'a [Constraint], unexplained: &'a [Erc]) -> Self {
        Self {
            unranked,
            unexplained,
        }
    }

    pub fn unranked(&self) -> &'a [Constraint] {
        self.unranked
    }

    pub fn unexplained(&self) -> &'a [Erc] {
        self.unexplained
    }

    /// True if `constraint` prefers the winner in some unexplained ERC.
    pub fn is_active(&self, constraint: &Constraint) -> bool {
        self.unexplained.iter().any(|erc| erc.w(constraint.index()))
    }
}

/// The result of one RCD run.
#[derive(Debug, Clone)]
pub struct Rcd {
    hierarchy: Hierarchy,
    explained: Vec<Vec<Erc>>,
    unranked: Vec<Constraint>,
    unexplained: Vec<Erc>,
}

impl Rcd {
    /// Runs RCD with the default policy: every rankable constraint goes into
    /// the next stratum.
    ///
    /// # Errors
    ///
    /// Returns an error if an ERC's length differs from the constraint list.
    pub fn run(constraints: &ConstraintList, ercs: &[Erc]) -> Result<Self> {
        Self::run_with(constraints, ercs, &AllRankable)
    }

    /// Runs RCD with an explicit stratum choice policy.
    ///
    /// # Panics
    ///
    /// Panics if the policy returns an empty stratum or a constraint that is
    /// not rankable in the current round.
    pub fn run_with<P>(constraints: &ConstraintList, ercs: &[Erc], policy: &P) -> Result<Self>
    where
        P: StratumChoice + ?Sized,
    {
        for erc in ercs {
            if erc.len() != constraints.len() {
                return Err(OtForgeError::ErcLengthMismatch {
                    expected: constraints.len(),
                    found: erc.len(),
                });
            }
        }

        let mut unranked: Vec<Constraint> = constraints.iter().cloned().collect();
        let mut unexplained: Vec<Erc> = ercs.to_vec();
        let mut strata = Vec::new();
        let mut explained = Vec::new();

        while !unranked.is_empty() {
            let rankable: Vec<Constraint> = unranked
                .iter()
                .filter(|c| !unexplained.iter().any(|erc| erc.l(c.index())))
                .cloned()
                .collect();
            if rankable.is_empty() {
                break;
            }

            let state = RcdState::new(&unranked, &unexplained);
            let mut stratum = policy.choose(&rankable, &state);
            assert!(
                !stratum.is_empty(),
                "stratum choice policy returned an empty stratum"
            );
            assert!(
                stratum.iter().all(|c| rankable.contains(c)),
                "stratum choice policy returned a constraint that is not rankable"
            );
            stratum.sort_by_key(Constraint::index);
            stratum.dedup();

            let (now_explained, still_unexplained): (Vec<Erc>, Vec<Erc>) = unexplained
                .into_iter()
                .partition(|erc| stratum.iter().any(|c| erc.w(c.index())));
            unexplained = still_unexplained;
            unranked.retain(|c| !stratum.contains(c));

            trace!(
                event = "stratum_ranked",
                stratum_index = strata.len(),
                size = stratum.len(),
                explained = now_explained.len(),
                unexplained = unexplained.len(),
            );

            strata.push(stratum);
            explained.push(now_explained);
        }

        let rcd = Self {
            hierarchy: Hierarchy::new(strata),
            explained,
            unranked,
            unexplained,
        };
        debug!(
            event = "rcd_end",
            ercs = ercs.len(),
            strata = rcd.hierarchy.len(),
            consistent = rcd.is_consistent(),
        );
        Ok(rcd)
    }

    /// The ranked strata. When inconsistent, the constraints that could not
    /// be ranked are reported by [`unranked`](Self::unranked) instead.
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub fn into_hierarchy(self) -> Hierarchy {
        self.hierarchy
    }

    /// True iff every constraint was ranked.
    pub fn is_consistent(&self) -> bool {
        self.unranked.is_empty()
    }

    pub fn unranked(&self) -> &[Constraint] {
        &self.unranked
    }

    /// ERCs explained by each stratum, parallel to the hierarchy's strata.
    pub fn explained(&self) -> &[Vec<Erc>] {
        &self.explained
    }

    /// ERCs no stratum explained.
    ///
    /// After a consistent run this holds only ERCs with no `W` and no `L`.
    pub fn unexplained(&self) -> &[Erc] {
        &self.unexplained
    }
}
