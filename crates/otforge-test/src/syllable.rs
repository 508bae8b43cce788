//! A toy coda system.
//!
//! Three constraints, in this order:
//! - `NoCoda` (markedness): one violation per word-final consonant
//! - `Max` (faithfulness): one violation per deleted segment
//! - `Dep` (faithfulness): one violation per inserted segment
//!
//! An input ending in a consonant, such as `pat`, has three candidates:
//! faithful `pat`, deletion `pa` and epenthesis `pata`. An input ending in a
//! vowel has a single faithful candidate.

use otforge_core::{Candidate, ConstraintKind, ConstraintList};

/// `NoCoda`, `Max`, `Dep`.
pub fn coda_constraints() -> ConstraintList {
    ConstraintList::from_specs([
        ("NoCoda", ConstraintKind::Markedness),
        ("Max", ConstraintKind::Faithfulness),
        ("Dep", ConstraintKind::Faithfulness),
    ])
    .expect("fixture names are unique")
}

fn ends_in_vowel(input: &str) -> bool {
    input
        .chars()
        .last()
        .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

/// The competition for `input`, faithful candidate first.
pub fn coda_candidates(input: &str) -> Vec<Candidate> {
    if input.is_empty() || ends_in_vowel(input) {
        return vec![Candidate::new(input, input, vec![0, 0, 0])];
    }
    let mut deleted = input.to_string();
    deleted.pop();
    vec![
        Candidate::new(input, input, vec![1, 0, 0]),
        Candidate::new(input, deleted, vec![0, 1, 0]),
        Candidate::new(input, format!("{input}a"), vec![0, 0, 1]),
    ]
}

/// The candidate of `input` whose output is `output`.
///
/// # Panics
/// Panics if Gen does not produce that output.
pub fn coda_candidate(input: &str, output: &str) -> Candidate {
    coda_candidates(input)
        .into_iter()
        .find(|c| c.output() == output)
        .unwrap_or_else(|| panic!("no candidate /{input}/ -> [{output}]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_final_input() {
        let outputs: Vec<String> = coda_candidates("pat")
            .iter()
            .map(|c| c.output().to_string())
            .collect();
        assert_eq!(outputs, vec!["pat", "pa", "pata"]);
    }

    #[test]
    fn test_vowel_final_input() {
        assert_eq!(coda_candidates("pa").len(), 1);
    }

    #[test]
    fn test_coda_candidate() {
        assert_eq!(coda_candidate("tak", "ta").violations(), &[0, 1, 0]);
    }
}
