//! Append-only ERC lists and grammars.
//!
//! Both types are copy-on-write: cloning is the duplication operation, and a
//! clone shares storage with its source until either side appends. Mutating
//! a duplicate can never reach the original.

use std::sync::Arc;

use otforge_core::{ConstraintList, Erc, OtForgeError, Result};

use crate::bias::StratumChoice;
use crate::rcd::Rcd;

/// An ordered, append-only list of ERCs with a cached consistency verdict.
///
/// # Example
///
/// ```
/// use otforge_core::{ConstraintKind, ConstraintList, Erc};
/// use otforge_ranking::ErcList;
///
/// let constraints = ConstraintList::from_specs([
///     ("C1", ConstraintKind::Markedness),
///     ("C2", ConstraintKind::Markedness),
/// ]).unwrap();
///
/// let mut list = ErcList::new(constraints);
/// assert!(list.add(Erc::parse("WL").unwrap()).unwrap());
///
/// let mut branch = list.clone();
/// assert!(!branch.add(Erc::parse("LW").unwrap()).unwrap());
///
/// assert!(list.is_consistent());
/// assert_eq!(list.len(), 1);
/// assert_eq!(branch.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ErcList {
    constraints: ConstraintList,
    ercs: Arc<Vec<Erc>>,
    consistent: bool,
}

impl ErcList {
    /// Creates an empty list over the given constraints.
    pub fn new(constraints: ConstraintList) -> Self {
        Self {
            constraints,
            ercs: Arc::new(Vec::new()),
            consistent: true,
        }
    }

    pub fn constraints(&self) -> &ConstraintList {
        &self.constraints
    }

    /// Appends an ERC and returns the updated consistency verdict.
    ///
    /// # Errors
    ///
    /// Returns an error if the ERC's length differs from the constraint list.
    pub fn add(&mut self, erc: Erc) -> Result<bool> {
        if erc.len() != self.constraints.len() {
            return Err(OtForgeError::ErcLengthMismatch {
                expected: self.constraints.len(),
                found: erc.len(),
            });
        }
        Arc::make_mut(&mut self.ercs).push(erc);
        // Adding ERCs never restores consistency.
        if self.consistent {
            self.consistent = Rcd::run(&self.constraints, &self.ercs)?.is_consistent();
        }
        Ok(self.consistent)
    }

    /// Appends several ERCs in order, checking consistency once at the end.
    pub fn add_all<I>(&mut self, ercs: I) -> Result<bool>
    where
        I: IntoIterator<Item = Erc>,
    {
        let expected = self.constraints.len();
        let ercs: Vec<Erc> = ercs.into_iter().collect();
        if let Some(bad) = ercs.iter().find(|erc| erc.len() != expected) {
            return Err(OtForgeError::ErcLengthMismatch {
                expected,
                found: bad.len(),
            });
        }
        if ercs.is_empty() {
            return Ok(self.consistent);
        }
        Arc::make_mut(&mut self.ercs).extend(ercs);
        if self.consistent {
            self.consistent = Rcd::run(&self.constraints, &self.ercs)?.is_consistent();
        }
        Ok(self.consistent)
    }

    pub fn is_consistent(&self) -> bool {
        self.consistent
    }

    pub fn len(&self) -> usize {
        self.ercs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ercs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Erc> {
        self.ercs.iter()
    }

    pub fn as_slice(&self) -> &[Erc] {
        &self.ercs
    }

    pub fn last(&self) -> Option<&Erc> {
        self.ercs.last()
    }
}

impl<'a> IntoIterator for &'a ErcList {
    type Item = &'a Erc;
    type IntoIter = std::slice::Iter<'a, Erc>;

    fn into_iter(self) -> Self::IntoIter {
        self.ercs.iter()
    }
}

/// The ranking knowledge of one learning hypothesis.
#[derive(Debug, Clone)]
pub struct Grammar {
    erc_list: ErcList,
}

impl Grammar {
    /// Creates a grammar with no ranking information.
    pub fn new(constraints: ConstraintList) -> Self {
        Self {
            erc_list: ErcList::new(constraints),
        }
    }

    /// Creates a grammar seeded with ERCs.
    pub fn with_ercs<I>(constraints: ConstraintList, ercs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Erc>,
    {
        let mut grammar = Self::new(constraints);
        grammar.erc_list.add_all(ercs)?;
        Ok(grammar)
    }

    pub fn constraints(&self) -> &ConstraintList {
        self.erc_list.constraints()
    }

    /// Adds an ERC and returns the updated consistency verdict.
    pub fn add_erc(&mut self, erc: Erc) -> Result<bool> {
        self.erc_list.add(erc)
    }

    pub fn is_consistent(&self) -> bool {
        self.erc_list.is_consistent()
    }

    pub fn erc_list(&self) -> &ErcList {
        &self.erc_list
    }

    /// An independent copy; appending to it leaves `self` untouched.
    pub fn dup(&self) -> Self {
        self.clone()
    }

    /// Runs RCD over this grammar's ERCs with the given policy.
    pub fn hierarchy_with<P>(&self, policy: &P) -> Result<Rcd>
    where
        P: StratumChoice + ?Sized,
    {
        Rcd::run_with(self.constraints(), self.erc_list.as_slice(), policy)
    }

    /// True if this grammar plus `extra` would be consistent. `self` is not
    /// changed.
    pub fn consistent_with(&self, extra: &[Erc]) -> Result<bool> {
        let mut trial = self.dup();
        trial.erc_list.add_all(extra.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bias::RankingBiasSomeLow;
    use otforge_test::ercs::{constraints, ercs, markedness_constraints};

    #[test]
    fn test_empty_grammar_is_consistent() {
        let grammar = Grammar::new(markedness_constraints(3));
        assert!(grammar.is_consistent());
        assert!(grammar.erc_list().is_empty());
    }

    #[test]
    fn test_add_erc_tracks_consistency() {
        let mut grammar = Grammar::new(markedness_constraints(2));
        assert!(grammar.add_erc(Erc::parse("WL").unwrap()).unwrap());
        assert!(!grammar.add_erc(Erc::parse("LW").unwrap()).unwrap());
        assert!(!grammar.is_consistent());
        // Stays inconsistent.
        assert!(!grammar.add_erc(Erc::parse("We").unwrap()).unwrap());
        assert_eq!(grammar.erc_list().len(), 3);
    }

    #[test]
    fn test_add_erc_rejects_wrong_length() {
        let mut grammar = Grammar::new(markedness_constraints(2));
        let err = grammar.add_erc(Erc::parse("WLe").unwrap()).unwrap_err();
        assert_eq!(
            err,
            OtForgeError::ErcLengthMismatch {
                expected: 2,
                found: 3
            }
        );
        assert!(grammar.erc_list().is_empty());
    }

    #[test]
    fn test_duplicates_evolve_independently() {
        let mut original = Grammar::with_ercs(markedness_constraints(2), ercs(&["WL"])).unwrap();
        let mut copy = original.dup();

        assert_eq!(
            original.add_erc(Erc::parse("We").unwrap()).unwrap(),
            copy.add_erc(Erc::parse("We").unwrap()).unwrap()
        );
        assert_eq!(original.is_consistent(), copy.is_consistent());

        copy.add_erc(Erc::parse("LW").unwrap()).unwrap();
        assert!(!copy.is_consistent());
        assert!(original.is_consistent());
        assert_eq!(original.erc_list().len(), 2);
        assert_eq!(copy.erc_list().len(), 3);
    }

    #[test]
    fn test_consistent_with_does_not_mutate() {
        let grammar = Grammar::with_ercs(markedness_constraints(2), ercs(&["WL"])).unwrap();
        assert!(!grammar.consistent_with(&ercs(&["LW"])).unwrap());
        assert!(grammar.consistent_with(&ercs(&["We"])).unwrap());
        assert_eq!(grammar.erc_list().len(), 1);
        assert!(grammar.is_consistent());
    }

    #[test]
    fn test_hierarchy_with_policy() {
        let grammar = Grammar::with_ercs(constraints("MFM"), ercs(&["LWe"])).unwrap();
        let rcd = grammar
            .hierarchy_with(&RankingBiasSomeLow::faithfulness_low())
            .unwrap();
        assert_eq!(rcd.hierarchy().to_string(), "[M3] [F2] [M1]");
    }

    #[test]
    fn test_with_ercs_inconsistent_seed() {
        let grammar =
            Grammar::with_ercs(markedness_constraints(2), ercs(&["WL", "LW"])).unwrap();
        assert!(!grammar.is_consistent());
    }
}
