//! Constraint identities.
//!
//! Constraints are owned by a linguistic system outside this crate. The
//! learner only ever holds a shared [`ConstraintList`] whose order fixes the
//! position of every label in an [`Erc`](crate::Erc) and every count in a
//! [`Candidate`](crate::Candidate) violation profile.

use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use crate::error::{OtForgeError, Result};

/// The two families of OT constraints.
///
/// # Example
///
/// ```
/// use otforge_core::ConstraintKind;
///
/// assert_ne!(ConstraintKind::Markedness, ConstraintKind::Faithfulness);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConstraintKind {
    /// Penalizes marked output structure.
    Markedness,
    /// Penalizes input/output disparity.
    Faithfulness,
}

/// An immutable constraint identity.
///
/// Compared by identity (name, index and kind); never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    name: String,
    index: usize,
    kind: ConstraintKind,
}

impl Constraint {
    /// Creates a new constraint.
    pub fn new(name: impl Into<String>, index: usize, kind: ConstraintKind) -> Self {
        Self {
            name: name.into(),
            index,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of this constraint in its [`ConstraintList`].
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn is_markedness(&self) -> bool {
        self.kind == ConstraintKind::Markedness
    }

    pub fn is_faithfulness(&self) -> bool {
        self.kind == ConstraintKind::Faithfulness
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered, shared list of constraints fixed for one learning run.
///
/// Cloning is cheap: clones share the same underlying storage.
///
/// # Example
///
/// ```
/// use otforge_core::{ConstraintKind, ConstraintList};
///
/// let list = ConstraintList::from_specs([
///     ("NoCoda", ConstraintKind::Markedness),
///     ("Max", ConstraintKind::Faithfulness),
/// ]).unwrap();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[1].name(), "Max");
/// assert_eq!(list.by_name("NoCoda").map(|c| c.index()), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintList {
    constraints: Arc<[Constraint]>,
}

impl ConstraintList {
    /// Builds a list from existing constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if an index differs from its position or a name repeats.
    pub fn new(constraints: Vec<Constraint>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (position, constraint) in constraints.iter().enumerate() {
            if constraint.index != position {
                return Err(OtForgeError::ConstraintIndex {
                    name: constraint.name.clone(),
                    index: constraint.index,
                    position,
                });
            }
            if !seen.insert(constraint.name.as_str()) {
                return Err(OtForgeError::DuplicateConstraint(constraint.name.clone()));
            }
        }
        Ok(Self {
            constraints: constraints.into(),
        })
    }

    /// Builds a list from `(name, kind)` pairs, assigning indices in order.
    pub fn from_specs<N, I>(specs: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, ConstraintKind)>,
    {
        let constraints = specs
            .into_iter()
            .enumerate()
            .map(|(index, (name, kind))| Constraint::new(name, index, kind))
            .collect();
        Self::new(constraints)
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Constraint> {
        self.constraints.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    pub fn as_slice(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn by_name(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    /// Returns the constraints of one kind, in list order.
    pub fn of_kind(&self, kind: ConstraintKind) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(move |c| c.kind == kind)
    }
}

impl Index<usize> for ConstraintList {
    type Output = Constraint;

    fn index(&self, index: usize) -> &Constraint {
        &self.constraints[index]
    }
}

impl<'a> IntoIterator for &'a ConstraintList {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConstraintList {
        ConstraintList::from_specs([
            ("NoCoda", ConstraintKind::Markedness),
            ("Max", ConstraintKind::Faithfulness),
            ("Dep", ConstraintKind::Faithfulness),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_specs_assigns_positions() {
        let list = sample();
        for (position, constraint) in list.iter().enumerate() {
            assert_eq!(constraint.index(), position);
        }
        assert_eq!(list[0].to_string(), "NoCoda");
    }

    #[test]
    fn test_rejects_misplaced_index() {
        let err = ConstraintList::new(vec![Constraint::new(
            "NoCoda",
            3,
            ConstraintKind::Markedness,
        )])
        .unwrap_err();
        assert!(matches!(
            err,
            OtForgeError::ConstraintIndex {
                index: 3,
                position: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let err = ConstraintList::from_specs([
            ("Max", ConstraintKind::Faithfulness),
            ("Max", ConstraintKind::Faithfulness),
        ])
        .unwrap_err();
        assert_eq!(err, OtForgeError::DuplicateConstraint("Max".into()));
    }

    #[test]
    fn test_of_kind() {
        let list = sample();
        let faith: Vec<&str> = list
            .of_kind(ConstraintKind::Faithfulness)
            .map(Constraint::name)
            .collect();
        assert_eq!(faith, vec!["Max", "Dep"]);
        assert!(list[0].is_markedness());
        assert!(list[2].is_faithfulness());
    }

    #[test]
    fn test_clone_shares_storage() {
        let list = sample();
        let copy = list.clone();
        assert!(Arc::ptr_eq(&list.constraints, &copy.constraints));
    }
}
