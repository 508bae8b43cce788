//! ERCs: Evaluations of a Ranking Condition.
//!
//! An ERC compares a winner candidate to a loser candidate on every
//! constraint of the system, in the order of the shared
//! [`ConstraintList`](crate::ConstraintList). A ranking satisfies the ERC
//! when some `W` constraint dominates every `L` constraint.

use std::fmt;
use std::sync::Arc;

use crate::candidate::Candidate;
use crate::error::{OtForgeError, Result};

/// Comparison label for one constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// Winner has fewer violations (winner-preferring).
    W,
    /// Winner has more violations (loser-preferring).
    L,
    /// Equal violations.
    E,
}

impl Label {
    /// Labels one constraint from the winner's and loser's violation counts.
    pub fn compare(winner: u32, loser: u32) -> Self {
        match winner.cmp(&loser) {
            std::cmp::Ordering::Less => Label::W,
            std::cmp::Ordering::Greater => Label::L,
            std::cmp::Ordering::Equal => Label::E,
        }
    }

    /// Swaps `W` and `L`.
    pub fn reversed(self) -> Self {
        match self {
            Label::W => Label::L,
            Label::L => Label::W,
            Label::E => Label::E,
        }
    }

    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'W' => Ok(Label::W),
            'L' => Ok(Label::L),
            'e' | 'E' => Ok(Label::E),
            other => Err(OtForgeError::InvalidLabel(other)),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Label::W => "W",
            Label::L => "L",
            Label::E => "e",
        })
    }
}

/// An immutable comparative record over all constraints.
///
/// Clones share the label storage, so the same ERC can sit in several
/// grammars and pair records at once.
///
/// # Example
///
/// ```
/// use otforge_core::{Erc, Label};
///
/// let erc = Erc::parse("WLe").unwrap();
/// assert_eq!(erc.len(), 3);
/// assert_eq!(erc.label(1), Label::L);
/// assert_eq!(erc.to_string(), "W L e");
/// assert_eq!(erc.reversed().to_string(), "L W e");
/// ```
#[derive(Debug, Clone)]
pub struct Erc {
    labels: Arc<[Label]>,
    tag: Option<Arc<str>>,
}

impl Erc {
    /// Creates an ERC from a label vector.
    pub fn new(labels: impl Into<Arc<[Label]>>) -> Self {
        Self {
            labels: labels.into(),
            tag: None,
        }
    }

    /// Parses a compact label string such as `"WLe"`. Whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self> {
        let labels = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Label::from_char)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(labels))
    }

    /// Builds the ERC of `winner` over `loser` by pointwise comparison.
    ///
    /// # Errors
    ///
    /// Returns an error if the violation profiles differ in length.
    pub fn from_candidates(winner: &Candidate, loser: &Candidate) -> Result<Self> {
        let w = winner.violations();
        let l = loser.violations();
        if w.len() != l.len() {
            return Err(OtForgeError::ViolationCountMismatch {
                expected: w.len(),
                found: l.len(),
            });
        }
        let labels: Vec<Label> = w
            .iter()
            .zip(l)
            .map(|(&wv, &lv)| Label::compare(wv, lv))
            .collect();
        Ok(Self::new(labels).with_tag(format!("{} > {}", winner.output(), loser.output())))
    }

    /// Attaches a descriptive tag, used only for display and diagnostics.
    pub fn with_tag(mut self, tag: impl Into<Arc<str>>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn label(&self, index: usize) -> Label {
        self.labels[index]
    }

    pub fn w(&self, index: usize) -> bool {
        self.labels[index] == Label::W
    }

    pub fn l(&self, index: usize) -> bool {
        self.labels[index] == Label::L
    }

    pub fn e(&self, index: usize) -> bool {
        self.labels[index] == Label::E
    }

    /// Indices of winner-preferring constraints.
    pub fn winner_preferring(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices_of(Label::W)
    }

    /// Indices of loser-preferring constraints.
    pub fn loser_preferring(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices_of(Label::L)
    }

    fn indices_of(&self, label: Label) -> impl Iterator<Item = usize> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(move |&(_, &l)| l == label)
            .map(|(i, _)| i)
    }

    /// True if no constraint prefers the loser; satisfied by every ranking.
    pub fn is_trivially_valid(&self) -> bool {
        !self.labels.contains(&Label::L)
    }

    /// True if some constraint prefers the loser and none prefers the winner.
    pub fn is_trivially_invalid(&self) -> bool {
        self.labels.contains(&Label::L) && !self.labels.contains(&Label::W)
    }

    /// True if every label is `e`.
    pub fn is_all_equal(&self) -> bool {
        self.labels.iter().all(|&l| l == Label::E)
    }

    /// The ERC of the loser over the winner.
    pub fn reversed(&self) -> Self {
        let labels: Vec<Label> = self.labels.iter().map(|l| l.reversed()).collect();
        Self {
            labels: labels.into(),
            tag: None,
        }
    }
}

// Identity is the label vector; the tag is descriptive only.
impl PartialEq for Erc {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Eq for Erc {}

impl std::hash::Hash for Erc {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.labels.hash(state);
    }
}

impl fmt::Display for Erc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{label}")?;
        }
        Ok(())
    }
}
