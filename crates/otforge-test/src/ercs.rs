//! Constraint list and ERC fixtures.

use otforge_core::{ConstraintKind, ConstraintList, Erc};

/// `n` markedness constraints named `C1` .. `Cn`.
pub fn markedness_constraints(n: usize) -> ConstraintList {
    ConstraintList::from_specs((1..=n).map(|i| (format!("C{i}"), ConstraintKind::Markedness)))
        .expect("generated names are unique")
}

/// Constraints from a kind string such as `"MFM"`.
///
/// Each constraint is named by its kind letter and 1-based position:
/// `"MFM"` gives `M1`, `F2`, `M3`.
///
/// # Panics
/// Panics on a letter other than `M` or `F`.
pub fn constraints(kinds: &str) -> ConstraintList {
    let specs = kinds.chars().enumerate().map(|(i, k)| {
        let kind = match k {
            'M' => ConstraintKind::Markedness,
            'F' => ConstraintKind::Faithfulness,
            other => panic!("unknown constraint kind letter {other:?}"),
        };
        (format!("{k}{}", i + 1), kind)
    });
    ConstraintList::from_specs(specs).expect("generated names are unique")
}

/// ERCs from compact label strings such as `"WLe"`.
///
/// # Panics
/// Panics on an invalid label.
pub fn ercs(labels: &[&str]) -> Vec<Erc> {
    labels
        .iter()
        .map(|s| Erc::parse(s).expect("valid ERC label string"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_names() {
        let list = constraints("MFM");
        let names: Vec<&str> = list.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["M1", "F2", "M3"]);
        assert!(list[1].is_faithfulness());
    }

    #[test]
    fn test_markedness_constraints() {
        let list = markedness_constraints(3);
        assert_eq!(list[2].name(), "C3");
        assert!(list.iter().all(|c| c.is_markedness()));
    }
}
