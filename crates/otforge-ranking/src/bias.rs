//! Stratum choice policies for RCD.
//!
//! A [`StratumChoice`] decides, each round, which of the rankable
//! constraints form the next stratum. [`AllRankable`] ranks everything
//! possible as high as possible. [`RankingBiasSomeLow`] keeps a designated
//! class of constraints (usually faithfulness) as low as the ERCs allow.

use std::fmt::{self, Debug};

use otforge_core::Constraint;

use crate::rcd::RcdState;

/// Chooses the next stratum from the rankable constraints.
///
/// Implementations must return a non-empty subset of `rankable`.
pub trait StratumChoice: Send + Sync + Debug {
    fn choose(&self, rankable: &[Constraint], state: &RcdState<'_>) -> Vec<Constraint>;
}

impl<P: StratumChoice + ?Sized> StratumChoice for Box<P> {
    fn choose(&self, rankable: &[Constraint], state: &RcdState<'_>) -> Vec<Constraint> {
        (**self).choose(rankable, state)
    }
}

/// Default policy: all rankable constraints form one stratum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllRankable;

impl StratumChoice for AllRankable {
    fn choose(&self, rankable: &[Constraint], _state: &RcdState<'_>) -> Vec<Constraint> {
        rankable.to_vec()
    }
}

/// Ranks constraints of a designated "low" class as low as possible.
///
/// Each round:
/// 1. If any high constraint is rankable, only the high ones are ranked.
/// 2. If no low constraint is active (`W` in an unexplained ERC), all the
///    rankable low constraints are ranked together.
/// 3. Otherwise each active low constraint is scored by how many high
///    constraints ranking it would free, following the cascade through
///    further high constraints. The highest score wins; ties go to the
///    first constraint in rankable order.
/// 4. If no active low constraint frees anything, all active low
///    constraints are ranked together.
///
/// Step 3 is greedy over single constraints rather than a search for the
/// smallest freeing subset.
///
/// # Example
///
/// ```
/// use otforge_core::{ConstraintKind, ConstraintList};
/// use otforge_ranking::{Rcd, RankingBiasSomeLow};
///
/// let constraints = ConstraintList::from_specs([
///     ("Max", ConstraintKind::Faithfulness),
///     ("NoCoda", ConstraintKind::Markedness),
/// ]).unwrap();
///
/// let rcd = Rcd::run_with(&constraints, &[], &RankingBiasSomeLow::faithfulness_low()).unwrap();
/// assert_eq!(rcd.hierarchy().to_string(), "[NoCoda] [Max]");
/// ```
pub struct RankingBiasSomeLow<F = fn(&Constraint) -> bool> {
    is_low: F,
}

impl RankingBiasSomeLow {
    /// Faithfulness constraints are kept low.
    pub fn faithfulness_low() -> Self {
        Self::new(Constraint::is_faithfulness as fn(&Constraint) -> bool)
    }

    /// Markedness constraints are kept low.
    pub fn markedness_low() -> Self {
        Self::new(Constraint::is_markedness as fn(&Constraint) -> bool)
    }
}

impl<F> RankingBiasSomeLow<F>
where
    F: Fn(&Constraint) -> bool + Send + Sync,
{
    /// Creates a bias from a predicate selecting the low constraints.
    pub fn new(is_low: F) -> Self {
        Self { is_low }
    }

    pub fn is_low(&self, constraint: &Constraint) -> bool {
        (self.is_low)(constraint)
    }

    /// Number of high constraints that become rankable, in cascade, if
    /// `low` alone were ranked next.
    pub fn freed_high_count(&self, low: &Constraint, state: &RcdState<'_>) -> usize {
        let mut unexplained: Vec<_> = state
            .unexplained()
            .iter()
            .filter(|erc| !erc.w(low.index()))
            .collect();
        let mut unranked: Vec<&Constraint> =
            state.unranked().iter().filter(|c| *c != low).collect();
        let mut freed = 0;

        loop {
            let newly: Vec<&Constraint> = unranked
                .iter()
                .copied()
                .filter(|c| !self.is_low(c) && !unexplained.iter().any(|erc| erc.l(c.index())))
                .collect();
            if newly.is_empty() {
                break;
            }
            freed += newly.len();
            unexplained.retain(|erc| !newly.iter().any(|c| erc.w(c.index())));
            unranked.retain(|c| !newly.contains(c));
        }
        freed
    }
}

impl<F> StratumChoice for RankingBiasSomeLow<F>
where
    F: Fn(&Constraint) -> bool + Send + Sync,
{
    fn choose(&self, rankable: &[Constraint], state: &RcdState<'_>) -> Vec<Constraint> {
        let (low, high): (Vec<Constraint>, Vec<Constraint>) =
            rankable.iter().cloned().partition(|c| self.is_low(c));
        if !high.is_empty() {
            return high;
        }

        let active: Vec<Constraint> = low.iter().filter(|c| state.is_active(c)).cloned().collect();
        if active.is_empty() {
            return low;
        }

        let mut best: Option<(&Constraint, usize)> = None;
        for candidate in &active {
            let count = self.freed_high_count(candidate, state);
            // Strictly greater: the first listed constraint keeps ties.
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((candidate, count));
            }
        }

        match best {
            Some((chosen, count)) if count > 0 => vec![chosen.clone()],
            _ => active,
        }
    }
}

impl<F> Debug for RankingBiasSomeLow<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankingBiasSomeLow").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otforge_core::Erc;
    use otforge_test::ercs::{constraints, ercs};

    fn names(list: &[Constraint]) -> Vec<&str> {
        list.iter().map(Constraint::name).collect()
    }

    fn rankable(all: &[Constraint], unexplained: &[Erc]) -> Vec<Constraint> {
        all.iter()
            .filter(|c| !unexplained.iter().any(|erc| erc.l(c.index())))
            .cloned()
            .collect()
    }

    #[test]
    fn test_all_rankable_returns_everything() {
        let list = constraints("MFM");
        let state = RcdState::new(list.as_slice(), &[]);
        assert_eq!(AllRankable.choose(list.as_slice(), &state).len(), 3);
    }

    #[test]
    fn test_high_before_low() {
        let list = constraints("FMFM");
        let state = RcdState::new(list.as_slice(), &[]);
        let bias = RankingBiasSomeLow::faithfulness_low();
        assert_eq!(names(&bias.choose(list.as_slice(), &state)), vec!["M2", "M4"]);
    }

    #[test]
    fn test_inactive_low_ranked_together() {
        let list = constraints("FFM");
        // M3 is blocked; F1 and F2 prefer nobody.
        let unexplained = ercs(&["eeL"]);
        let state = RcdState::new(list.as_slice(), &unexplained);
        let bias = RankingBiasSomeLow::faithfulness_low();
        let chosen = bias.choose(&rankable(list.as_slice(), &unexplained), &state);
        assert_eq!(names(&chosen), vec!["F1", "F2"]);
    }

    #[test]
    fn test_cascade_prefers_more_freed_high() {
        // F1 frees M3, which frees M4. F2 frees only M5.
        let list = constraints("FFMMM");
        let unexplained = ercs(&["WeLee", "eeWLe", "eWeeL"]);
        let state = RcdState::new(list.as_slice(), &unexplained);
        let bias = RankingBiasSomeLow::faithfulness_low();

        assert_eq!(bias.freed_high_count(&list[0], &state), 2);
        assert_eq!(bias.freed_high_count(&list[1], &state), 1);
        let chosen = bias.choose(&rankable(list.as_slice(), &unexplained), &state);
        assert_eq!(names(&chosen), vec!["F1"]);
    }

    #[test]
    fn test_cascade_best_not_first() {
        // Same shape with the two-freeing constraint listed second.
        let list = constraints("FFMMM");
        let unexplained = ercs(&["eWLee", "eeWLe", "WeeeL"]);
        let state = RcdState::new(list.as_slice(), &unexplained);
        let bias = RankingBiasSomeLow::faithfulness_low();
        let chosen = bias.choose(&rankable(list.as_slice(), &unexplained), &state);
        assert_eq!(names(&chosen), vec!["F2"]);
    }

    #[test]
    fn test_tie_goes_to_first_listed() {
        let list = constraints("FFMM");
        let unexplained = ercs(&["WeLe", "eWeL"]);
        let state = RcdState::new(list.as_slice(), &unexplained);
        let bias = RankingBiasSomeLow::faithfulness_low();
        let chosen = bias.choose(&rankable(list.as_slice(), &unexplained), &state);
        assert_eq!(names(&chosen), vec!["F1"]);
    }

    #[test]
    fn test_zero_freed_ranks_all_active() {
        // M4 needs both F1 and F2 ranked first; neither frees it alone.
        let list = constraints("FFFM");
        let unexplained = ercs(&["WeeL", "eWeL"]);
        let state = RcdState::new(list.as_slice(), &unexplained);
        let bias = RankingBiasSomeLow::faithfulness_low();
        let chosen = bias.choose(&rankable(list.as_slice(), &unexplained), &state);
        assert_eq!(names(&chosen), vec!["F1", "F2"]);
    }

    #[test]
    fn test_custom_predicate() {
        let list = constraints("MMM");
        let state = RcdState::new(list.as_slice(), &[]);
        let bias = RankingBiasSomeLow::new(|c: &Constraint| c.name() == "M1");
        assert_eq!(names(&bias.choose(list.as_slice(), &state)), vec!["M2", "M3"]);
    }

    #[test]
    fn test_markedness_low() {
        let list = constraints("MF");
        let state = RcdState::new(list.as_slice(), &[]);
        let bias = RankingBiasSomeLow::markedness_low();
        assert_eq!(names(&bias.choose(list.as_slice(), &state)), vec!["F2"]);
    }
}
