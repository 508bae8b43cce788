//! Three-way outcomes of a search over options.
//!
//! Learners often need to know whether no option, exactly one option, or
//! several options pass a test, for example which feature values keep the
//! grammar consistent. [`SearchOutcome`] keeps the three cases apart so the
//! caller cannot mistake an ambiguous result for a unique one.

use otforge_core::{Erc, Result};
use otforge_ranking::Grammar;
use tracing::trace;

/// The successful options of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    /// No option passed.
    None,
    /// Exactly one option passed.
    One(T),
    /// Two or more options passed, in option order.
    Many(Vec<T>),
}

impl<T> SearchOutcome<T> {
    /// Classifies a list of successful options.
    pub fn from_successes(mut successes: Vec<T>) -> Self {
        match successes.len() {
            0 => SearchOutcome::None,
            1 => SearchOutcome::One(successes.remove(0)),
            _ => SearchOutcome::Many(successes),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, SearchOutcome::None)
    }

    pub fn is_one(&self) -> bool {
        matches!(self, SearchOutcome::One(_))
    }

    pub fn is_many(&self) -> bool {
        matches!(self, SearchOutcome::Many(_))
    }

    /// The unique success, if there is exactly one.
    pub fn single(&self) -> Option<&T> {
        match self {
            SearchOutcome::One(only) => Some(only),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::None => 0,
            SearchOutcome::One(_) => 1,
            SearchOutcome::Many(all) => all.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_none()
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            SearchOutcome::None => Vec::new(),
            SearchOutcome::One(only) => vec![only],
            SearchOutcome::Many(all) => all,
        }
    }
}

/// Evaluates every option with `test` and classifies the ones that pass.
///
/// All options are evaluated even after a second success; the caller gets
/// the full list in [`SearchOutcome::Many`].
///
/// # Errors
///
/// Returns the first error `test` returns.
pub fn find_rescues<T, F>(options: impl IntoIterator<Item = T>, mut test: F) -> Result<SearchOutcome<T>>
where
    F: FnMut(&T) -> Result<bool>,
{
    let mut successes = Vec::new();
    for option in options {
        if test(&option)? {
            successes.push(option);
        }
    }
    Ok(SearchOutcome::from_successes(successes))
}

/// Keeps the options whose ERCs are consistent with `grammar`.
///
/// Each option carries the ERCs it would add; the grammar itself is never
/// changed.
///
/// # Example
///
/// ```
/// use otforge_core::{Erc, ConstraintKind, ConstraintList};
/// use otforge_learner::{consistent_options, SearchOutcome};
/// use otforge_ranking::Grammar;
///
/// let constraints = ConstraintList::from_specs([
///     ("C1", ConstraintKind::Markedness),
///     ("C2", ConstraintKind::Markedness),
/// ]).unwrap();
/// let grammar = Grammar::with_ercs(constraints, [Erc::parse("WL").unwrap()]).unwrap();
///
/// let outcome = consistent_options(&grammar, vec![
///     ("keep", vec![Erc::parse("We").unwrap()]),
///     ("flip", vec![Erc::parse("LW").unwrap()]),
/// ]).unwrap();
/// assert_eq!(outcome, SearchOutcome::One("keep"));
/// ```
///
/// # Errors
///
/// Returns an error if an option's ERC has the wrong length.
pub fn consistent_options<T>(
    grammar: &Grammar,
    options: Vec<(T, Vec<Erc>)>,
) -> Result<SearchOutcome<T>> {
    let mut successes = Vec::new();
    for (option, ercs) in options {
        let consistent = grammar.consistent_with(&ercs)?;
        trace!(event = "option_tested", ercs = ercs.len(), consistent = consistent);
        if consistent {
            successes.push(option);
        }
    }
    Ok(SearchOutcome::from_successes(successes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use otforge_core::OtForgeError;
    use otforge_test::ercs::{ercs, markedness_constraints};

    #[test]
    fn test_from_successes() {
        assert!(SearchOutcome::<u8>::from_successes(vec![]).is_none());
        assert_eq!(SearchOutcome::from_successes(vec![7]), SearchOutcome::One(7));
        let many = SearchOutcome::from_successes(vec![1, 2, 3]);
        assert!(many.is_many());
        assert_eq!(many.len(), 3);
        assert_eq!(many.single(), None);
        assert_eq!(many.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_find_rescues_evaluates_all_options() {
        let mut seen = Vec::new();
        let outcome = find_rescues(1..=6, |&n| {
            seen.push(n);
            Ok(n % 3 == 0)
        })
        .unwrap();
        assert_eq!(outcome, SearchOutcome::Many(vec![3, 6]));
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_find_rescues_propagates_error() {
        let err = find_rescues([1, 2], |_| Err(OtForgeError::Config("oracle".into()))).unwrap_err();
        assert_eq!(err, OtForgeError::Config("oracle".into()));
    }

    #[test]
    fn test_consistent_options() {
        let grammar = Grammar::with_ercs(markedness_constraints(3), ercs(&["WLe"])).unwrap();
        let options = vec![
            ("a", ercs(&["LWe"])),
            ("b", ercs(&["eWL"])),
            ("c", ercs(&["LeW", "eWL"])),
        ];

        let outcome = consistent_options(&grammar, options).unwrap();
        assert_eq!(outcome, SearchOutcome::One("b"));
        assert_eq!(grammar.erc_list().len(), 1);
    }

    #[test]
    fn test_consistent_options_none_and_many() {
        let grammar = Grammar::new(markedness_constraints(2));
        let none = consistent_options(&grammar, vec![((), ercs(&["LL"]))]).unwrap();
        assert!(none.is_none());

        let many = consistent_options(&grammar, vec![(1, ercs(&["WL"])), (2, ercs(&["LW"]))]).unwrap();
        assert_eq!(many.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_consistent_options_length_error() {
        let grammar = Grammar::new(markedness_constraints(2));
        let err = consistent_options(&grammar, vec![("x", ercs(&["WLe"]))]).unwrap_err();
        assert_eq!(
            err,
            OtForgeError::ErcLengthMismatch {
                expected: 2,
                found: 3
            }
        );
    }
}
