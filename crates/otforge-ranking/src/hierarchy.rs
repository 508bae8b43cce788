//! Constraint hierarchies.

use std::fmt;

use otforge_core::Constraint;

/// An ordered sequence of strata, highest-ranked first.
///
/// Constraints in one stratum are tied relative to each other. Built by
/// [`Rcd`](crate::Rcd) and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    strata: Vec<Vec<Constraint>>,
}

impl Hierarchy {
    pub fn new(strata: Vec<Vec<Constraint>>) -> Self {
        Self { strata }
    }

    pub fn strata(&self) -> &[Vec<Constraint>] {
        &self.strata
    }

    /// Number of strata.
    pub fn len(&self) -> usize {
        self.strata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strata.is_empty()
    }

    /// Index of the stratum holding `constraint`, if it is ranked.
    pub fn stratum_of(&self, constraint: &Constraint) -> Option<usize> {
        self.strata
            .iter()
            .position(|stratum| stratum.contains(constraint))
    }

    /// All ranked constraints, from the top stratum down.
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.strata.iter().flatten()
    }

    /// True if `a` sits in a strictly higher stratum than `b`.
    pub fn ranks_above(&self, a: &Constraint, b: &Constraint) -> bool {
        match (self.stratum_of(a), self.stratum_of(b)) {
            (Some(sa), Some(sb)) => sa < sb,
            _ => false,
        }
    }
}

impl fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stratum) in self.strata.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str("[")?;
            for (j, constraint) in stratum.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{constraint}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otforge_core::ConstraintKind;

    fn c(name: &str, index: usize) -> Constraint {
        Constraint::new(name, index, ConstraintKind::Markedness)
    }

    #[test]
    fn test_display() {
        let h = Hierarchy::new(vec![vec![c("A", 0)], vec![c("B", 1), c("C", 2)]]);
        assert_eq!(h.to_string(), "[A] [B C]");
        assert_eq!(Hierarchy::default().to_string(), "");
    }

    #[test]
    fn test_ranks_above() {
        let h = Hierarchy::new(vec![vec![c("A", 0)], vec![c("B", 1), c("C", 2)]]);
        assert!(h.ranks_above(&c("A", 0), &c("C", 2)));
        assert!(!h.ranks_above(&c("B", 1), &c("C", 2)));
        assert!(!h.ranks_above(&c("C", 2), &c("A", 0)));
        assert!(!h.ranks_above(&c("A", 0), &c("Z", 9)));
        assert_eq!(h.stratum_of(&c("C", 2)), Some(1));
        assert_eq!(h.constraints().count(), 3);
    }
}
