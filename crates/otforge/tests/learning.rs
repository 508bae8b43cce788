//! End-to-end learning runs through the facade.

use otforge::prelude::*;
use otforge::{consistent_options, ConfigError, MrcdResult};
use otforge_test::syllable::{coda_candidate, coda_candidates, coda_constraints};

fn coda_system() -> FnSystem<fn(&str) -> Vec<Candidate>> {
    FnSystem::new(coda_constraints(), coda_candidates as fn(&str) -> Vec<Candidate>)
}

fn added(result: &MrcdResult) -> Vec<String> {
    result.added_ercs().map(|e| e.to_string()).collect()
}

#[test]
fn test_no_coda_language_by_consistency() {
    otforge::logging::init();
    let learner = Learner::new(LearnerConfig::default(), coda_system()).unwrap();
    let grammar = learner.new_grammar();
    let winners = vec![coda_candidate("pat", "pa"), coda_candidate("pa", "pa")];

    let result = learner.run_mrcd(&winners, &grammar).unwrap();

    assert_eq!(added(&result), vec!["W L e", "e L W"]);
    assert!(result.is_consistent());
    let rcd = result.grammar().hierarchy_with(&AllRankable).unwrap();
    assert_eq!(rcd.hierarchy().to_string(), "[NoCoda Dep] [Max]");
    assert!(grammar.erc_list().is_empty());
}

#[test]
fn test_pool_with_faithfulness_low_from_toml() {
    let config = LearnerConfig::from_toml_str(
        r#"
        loser_selection = "pool"

        [ranking_bias]
        type = "some_low"
        low_kind = "faithfulness"
        "#,
    )
    .unwrap();
    let learner = Learner::new(config, coda_system()).unwrap();

    let result = learner
        .run_mrcd(&[coda_candidate("pat", "pa")], &learner.new_grammar())
        .unwrap();

    // The bias already ranks NoCoda on top, so only Dep over Max is learned.
    assert_eq!(added(&result), vec!["e L W"]);
    let rcd = result
        .grammar()
        .hierarchy_with(&RankingBiasSomeLow::faithfulness_low())
        .unwrap();
    assert_eq!(rcd.hierarchy().to_string(), "[NoCoda] [Dep] [Max]");
}

#[test]
fn test_ctie_from_yaml_detects_inconsistency() {
    let config = LearnerConfig::from_yaml_str("loser_selection: ctie\n").unwrap();
    let learner = Learner::new(config, coda_system()).unwrap();
    let winners = vec![coda_candidate("pat", "pat"), coda_candidate("tak", "ta")];

    let result = learner.run_mrcd(&winners, &learner.new_grammar()).unwrap();

    assert!(result.any_change());
    assert!(!result.is_consistent());
}

#[test]
fn test_empty_winner_list_changes_nothing() {
    let learner = Learner::new(
        LearnerConfig::new().with_loser_selection(LoserSelectionType::Pool),
        coda_system(),
    )
    .unwrap();
    let grammar = Grammar::with_ercs(coda_constraints(), [Erc::parse("LWe").unwrap()]).unwrap();

    let result = learner.run_mrcd(&[], &grammar).unwrap();

    assert!(!result.any_change());
    assert_eq!(
        result.grammar().erc_list().as_slice(),
        grammar.erc_list().as_slice()
    );
}

#[test]
fn test_rejected_config_surfaces_error() {
    let err = LearnerConfig::from_toml_str("loser_selection = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_hypotheses_as_search_outcome() {
    let learner = Learner::new(LearnerConfig::default(), coda_system()).unwrap();
    let grammar = learner.new_grammar();

    // Each hypothesis about /pat/ contributes the ERCs MRCD learns from it.
    let hypotheses: Vec<(&str, Vec<Erc>)> = ["pat", "pa", "pata"]
        .into_iter()
        .map(|output| {
            let result = learner
                .run_mrcd(&[coda_candidate("pat", output)], &grammar)
                .unwrap();
            (output, result.added_ercs().cloned().collect())
        })
        .collect();

    // /tak/ -> [ta] is already known, so only deletion fits.
    let known = learner
        .run_mrcd(&[coda_candidate("tak", "ta")], &grammar)
        .unwrap()
        .into_grammar();
    let outcome = consistent_options(&known, hypotheses).unwrap();

    assert_eq!(outcome, SearchOutcome::One("pa"));
}
