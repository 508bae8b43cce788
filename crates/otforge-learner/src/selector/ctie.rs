//! Conflicts-tie comparison.

use std::cmp::Ordering;

use otforge_core::{Candidate, Result};
use otforge_ranking::{AllRankable, StratumChoice};

use super::{CandidateComparer, Comparison, RankingInfo};

/// Compares candidates stratum by stratum without pooling.
///
/// Strata where every constraint assigns equal violations are skipped. In
/// the first other stratum, if some constraints prefer the winner and others
/// the competitor, the constraints conflict and the result is a
/// [`Comparison::Tie`]: some refinement of the hierarchy lets the competitor
/// win. Otherwise the side all its constraints prefer wins.
#[derive(Debug, Clone, Default)]
pub struct CtieComparer<P = AllRankable> {
    policy: P,
}

impl<P: StratumChoice> CtieComparer<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }
}

impl<P: StratumChoice> CandidateComparer for CtieComparer<P> {
    fn hierarchy_policy(&self) -> &dyn StratumChoice {
        &self.policy
    }

    fn compare(
        &self,
        winner: &Candidate,
        competitor: &Candidate,
        info: &RankingInfo<'_>,
    ) -> Result<Comparison> {
        for stratum in info.hierarchy()?.strata() {
            let mut prefers_winner = false;
            let mut prefers_competitor = false;
            for constraint in stratum {
                match winner
                    .violations_of(constraint)
                    .cmp(&competitor.violations_of(constraint))
                {
                    Ordering::Less => prefers_winner = true,
                    Ordering::Greater => prefers_competitor = true,
                    Ordering::Equal => {}
                }
            }
            match (prefers_winner, prefers_competitor) {
                (true, true) => return Ok(Comparison::Tie),
                (true, false) => return Ok(Comparison::Winner),
                (false, true) => return Ok(Comparison::Competitor),
                (false, false) => {}
            }
        }
        Ok(Comparison::IdenticalViolations)
    }
}
