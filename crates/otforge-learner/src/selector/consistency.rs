//! Consistency comparison.

use otforge_core::{Candidate, Erc, Result};

use super::{CandidateComparer, Comparison, RankingInfo};

/// Prefers the competitor iff some ranking consistent with the grammar's
/// ERCs makes the competitor beat the winner.
///
/// Checked by adding the competitor-over-winner ERC to a duplicate of the
/// grammar and asking RCD whether the result is still consistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyComparer;

impl CandidateComparer for ConsistencyComparer {
    fn compare(
        &self,
        winner: &Candidate,
        competitor: &Candidate,
        info: &RankingInfo<'_>,
    ) -> Result<Comparison> {
        let erc = Erc::from_candidates(winner, competitor)?;
        if erc.is_all_equal() {
            return Ok(Comparison::IdenticalViolations);
        }
        if info.grammar().consistent_with(&[erc.reversed()])? {
            Ok(Comparison::Competitor)
        } else {
            Ok(Comparison::Winner)
        }
    }
}
