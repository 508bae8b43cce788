//! Learner entry point that hides the comparer wiring.

use std::path::Path;

use otforge_config::{ConfigError, LearnerConfig};
use otforge_core::{Candidate, Result};
use otforge_learner::{
    CandidateComparer, ComparerBuilder, GenLoserSelector, LinguisticSystem, LoserSelection, Mrcd,
    MrcdResult, MrcdSingle, MrcdSingleResult,
};
use otforge_ranking::Grammar;
use tracing::info;

/// A linguistic system paired with the loser selection its configuration
/// asks for.
///
/// The system may be owned or borrowed (`&S` is itself a system).
#[derive(Debug)]
pub struct Learner<Sys> {
    config: LearnerConfig,
    selector: GenLoserSelector<Sys, Box<dyn CandidateComparer>>,
}

impl<Sys: LinguisticSystem> Learner<Sys> {
    /// Builds the comparer described by `config` over `system`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `config` fails
    /// [`LearnerConfig::validate`], for example a ranking bias paired with the
    /// consistency comparer.
    pub fn new(config: LearnerConfig, system: Sys) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let comparer = ComparerBuilder::build(&config);
        Ok(Self {
            config,
            selector: GenLoserSelector::new(system, comparer),
        })
    }

    /// Loads configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_config_file(
        path: impl AsRef<Path>,
        system: Sys,
    ) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = if path.exists() {
            LearnerConfig::load(path)?
        } else {
            LearnerConfig::default()
        };
        Self::new(config, system)
    }

    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    pub fn system(&self) -> &Sys {
        self.selector.system()
    }

    /// A grammar over the system's constraints with no ERCs.
    pub fn new_grammar(&self) -> Grammar {
        Grammar::new(self.system().constraints().clone())
    }

    /// The first informative loser for `winner`, if any.
    pub fn select_loser(&self, winner: &Candidate, grammar: &Grammar) -> Result<Option<Candidate>> {
        self.selector.select_loser(winner, grammar)
    }

    /// Runs [`MrcdSingle`] for one winner.
    pub fn run_single(&self, winner: &Candidate, grammar: &Grammar) -> Result<MrcdSingleResult> {
        MrcdSingle::run(winner, grammar, &self.selector)
    }

    /// Runs [`Mrcd`] over `winners`, starting from `grammar`.
    ///
    /// `grammar` and `winners` are left unchanged.
    pub fn run_mrcd(&self, winners: &[Candidate], grammar: &Grammar) -> Result<MrcdResult> {
        info!(
            event = "learn_start",
            loser_selection = ?self.config.loser_selection,
            winners = winners.len(),
            ercs = grammar.erc_list().len(),
        );
        Mrcd::run(winners, grammar, &self.selector)
    }
}
