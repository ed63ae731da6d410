//! Tournament configuration

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};
use crate::payoff::PayoffMatrix;

/// Round count, repeat count, seed and payoffs for one tournament
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Rounds per match (R)
    pub rounds: u32,
    /// Independent round-robin sweeps (K)
    pub repeat: u32,
    /// Seed for stochastic strategies
    pub seed: u64,
    pub payoff: PayoffMatrix,
}

impl TournamentConfig {
    pub fn new(rounds: u32, repeat: u32) -> Self {
        Self {
            rounds,
            repeat,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_payoff(mut self, payoff: PayoffMatrix) -> Self {
        self.payoff = payoff;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(ArenaError::InvalidRounds);
        }
        if self.repeat == 0 {
            return Err(ArenaError::InvalidRepeat);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            repeat: 1,
            seed: 0,
            payoff: PayoffMatrix::default(),
        }
    }
}
