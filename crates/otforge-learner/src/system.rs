//! Linguistic systems: a constraint list plus a Gen function.
//!
//! A system is built by the caller for one learning run and passed by
//! reference; nothing here is global.

use std::collections::BTreeMap;
use std::fmt::{self, Debug};

use otforge_core::{Candidate, ConstraintList, OtForgeError, Result};

/// The collaborator that owns constraints and generates competitions.
pub trait LinguisticSystem: Send + Sync {
    /// The constraint list every violation profile is ordered by.
    fn constraints(&self) -> &ConstraintList;

    /// Gen: the full competition for `input`.
    fn competition(&self, input: &str) -> Vec<Candidate>;
}

impl<T: LinguisticSystem + ?Sized> LinguisticSystem for &T {
    fn constraints(&self) -> &ConstraintList {
        (**self).constraints()
    }

    fn competition(&self, input: &str) -> Vec<Candidate> {
        (**self).competition(input)
    }
}

/// A system whose competitions are precomputed per input.
///
/// # Example
///
/// ```
/// use otforge_core::{Candidate, ConstraintKind, ConstraintList};
/// use otforge_learner::{LinguisticSystem, TableSystem};
///
/// let constraints = ConstraintList::from_specs([
///     ("NoCoda", ConstraintKind::Markedness),
///     ("Max", ConstraintKind::Faithfulness),
/// ]).unwrap();
///
/// let system = TableSystem::new(constraints)
///     .with_competition("pat", vec![
///         Candidate::new("pat", "pat", vec![1, 0]),
///         Candidate::new("pat", "pa", vec![0, 1]),
///     ])
///     .unwrap();
///
/// assert_eq!(system.competition("pat").len(), 2);
/// assert!(system.competition("tak").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TableSystem {
    constraints: ConstraintList,
    competitions: BTreeMap<String, Vec<Candidate>>,
}

impl TableSystem {
    pub fn new(constraints: ConstraintList) -> Self {
        Self {
            constraints,
            competitions: BTreeMap::new(),
        }
    }

    /// Registers the competition for `input`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate's violation profile does not match
    /// the constraint list.
    pub fn insert(&mut self, input: impl Into<String>, candidates: Vec<Candidate>) -> Result<()> {
        let expected = self.constraints.len();
        if let Some(bad) = candidates
            .iter()
            .find(|c| c.violations().len() != expected)
        {
            return Err(OtForgeError::ViolationCountMismatch {
                expected,
                found: bad.violations().len(),
            });
        }
        self.competitions.insert(input.into(), candidates);
        Ok(())
    }

    pub fn with_competition(
        mut self,
        input: impl Into<String>,
        candidates: Vec<Candidate>,
    ) -> Result<Self> {
        self.insert(input, candidates)?;
        Ok(self)
    }

    /// Inputs with a registered competition, in sorted order.
    pub fn inputs(&self) -> impl Iterator<Item = &str> {
        self.competitions.keys().map(String::as_str)
    }
}

impl LinguisticSystem for TableSystem {
    fn constraints(&self) -> &ConstraintList {
        &self.constraints
    }

    fn competition(&self, input: &str) -> Vec<Candidate> {
        self.competitions.get(input).cloned().unwrap_or_default()
    }
}

/// A system whose Gen is a function.
pub struct FnSystem<F> {
    constraints: ConstraintList,
    gen: F,
}

impl<F> FnSystem<F>
where
    F: Fn(&str) -> Vec<Candidate> + Send + Sync,
{
    pub fn new(constraints: ConstraintList, gen: F) -> Self {
        Self { constraints, gen }
    }
}

impl<F> LinguisticSystem for FnSystem<F>
where
    F: Fn(&str) -> Vec<Candidate> + Send + Sync,
{
    fn constraints(&self) -> &ConstraintList {
        &self.constraints
    }

    fn competition(&self, input: &str) -> Vec<Candidate> {
        (self.gen)(input)
    }
}

impl<F> Debug for FnSystem<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSystem")
            .field("constraints", &self.constraints.len())
            .finish()
    }
}
