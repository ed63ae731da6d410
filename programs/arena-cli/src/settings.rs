//! Runner configuration: config file values with command-line overrides

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use arena_core::{PayoffMatrix, StrategySpec, TournamentConfig};
use serde::Deserialize;

pub const DEFAULT_ROUNDS: u32 = 200;
pub const DEFAULT_REPEAT: u32 = 5;
pub const DEFAULT_DUEL_ROUNDS: u32 = 20;

/// Contents of a `--config` file. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArenaFile {
    pub rounds: Option<u32>,
    pub repeat: Option<u32>,
    pub seed: Option<u64>,
    pub payoff: Option<PayoffMatrix>,
    pub lineup: Option<Vec<StrategySpec>>,
}

/// Values given on the command line; these win over the file
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    pub rounds: Option<u32>,
    pub repeat: Option<u32>,
    pub seed: Option<u64>,
}

impl ArenaFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn tournament_config(&self, overrides: &Overrides) -> Result<TournamentConfig> {
        self.build(overrides, DEFAULT_ROUNDS, self.rounds)
    }

    /// A duel ignores the file's tournament round count
    pub fn duel_config(&self, overrides: &Overrides) -> Result<TournamentConfig> {
        self.build(overrides, DEFAULT_DUEL_ROUNDS, None)
    }

    fn build(
        &self,
        overrides: &Overrides,
        default_rounds: u32,
        file_rounds: Option<u32>,
    ) -> Result<TournamentConfig> {
        let rounds = overrides.rounds.or(file_rounds).unwrap_or(default_rounds);
        let repeat = overrides.repeat.or(self.repeat).unwrap_or(DEFAULT_REPEAT);
        let config = TournamentConfig::new(rounds, repeat)
            .with_seed(overrides.seed.or(self.seed).unwrap_or(0))
            .with_payoff(self.payoff.unwrap_or_default());
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}
