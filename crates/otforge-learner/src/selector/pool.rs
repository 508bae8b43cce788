//! Pool comparison.

use std::cmp::Ordering;

use otforge_core::{Candidate, Result};
use otforge_ranking::{AllRankable, StratumChoice};

use super::{CandidateComparer, Comparison, RankingInfo};

/// Compares candidates stratum by stratum, pooling the violations of all
/// constraints in a stratum.
///
/// The first stratum with different pooled totals decides. If every stratum
/// pools equally the result is a [`Comparison::Tie`], or
/// [`Comparison::IdenticalViolations`] when the profiles match exactly.
#[derive(Debug, Clone, Default)]
pub struct PoolComparer<P = AllRankable> {
    policy: P,
}

impl<P: StratumChoice> PoolComparer<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }
}

impl<P: StratumChoice> CandidateComparer for PoolComparer<P> {
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
            let pooled = |cand: &Candidate| -> u64 {
                stratum.iter().map(|c| u64::from(cand.violations_of(c))).sum()
            };
            match pooled(winner).cmp(&pooled(competitor)) {
                Ordering::Less => return Ok(Comparison::Winner),
                Ordering::Greater => return Ok(Comparison::Competitor),
                Ordering::Equal => {}
            }
        }
        if winner.has_identical_violations(competitor) {
            Ok(Comparison::IdenticalViolations)
        } else {
            Ok(Comparison::Tie)
        }
    }
}
