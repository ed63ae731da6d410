//! Match execution engine

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ArenaError, Result};
use crate::payoff::PayoffMatrix;
use crate::random::{MatchRng, Seat};
use crate::strategy::{Move, Strategy};

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: i32,
    pub score_b: i32,
    pub cumulative_a: i64,
    pub cumulative_b: i64,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name_a: String,
    pub name_b: String,
    pub rounds: Vec<RoundResult>,
    pub total_score_a: i64,
    pub total_score_b: i64,
}

impl MatchResult {
    pub fn history_a(&self) -> Vec<Move> {
        self.rounds.iter().map(|r| r.move_a).collect()
    }

    pub fn history_b(&self) -> Vec<Move> {
        self.rounds.iter().map(|r| r.move_b).collect()
    }
}

/// One bounded contest between two strategies.
///
/// A match is single-use: once `rounds` rounds are played it is complete
/// and refuses to play more. Build a new one to replay a pairing.
pub struct Match<'a> {
    strategy_a: &'a dyn Strategy,
    strategy_b: &'a dyn Strategy,
    payoffs: &'a PayoffMatrix,
    round_count: u32,
    rng: MatchRng,
    history_a: Vec<Move>,
    history_b: Vec<Move>,
    rounds: Vec<RoundResult>,
    score_a: i64,
    score_b: i64,
}

impl<'a> Match<'a> {
    /// Fresh match with empty histories and zero scores
    pub fn new(
        strategy_a: &'a dyn Strategy,
        strategy_b: &'a dyn Strategy,
        payoffs: &'a PayoffMatrix,
        round_count: u32,
    ) -> Result<Self> {
        if round_count == 0 {
            return Err(ArenaError::InvalidRounds);
        }
        let capacity = round_count as usize;
        Ok(Self {
            strategy_a,
            strategy_b,
            payoffs,
            round_count,
            rng: MatchRng::new(0),
            history_a: Vec::with_capacity(capacity),
            history_b: Vec::with_capacity(capacity),
            rounds: Vec::with_capacity(capacity),
            score_a: 0,
            score_b: 0,
        })
    }

    /// Use the given randomness stream for stochastic strategies
    pub fn with_rng(mut self, rng: MatchRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(MatchRng::new(seed))
    }

    /// Play one round.
    ///
    /// Both strategies decide from the same pre-round state, then both
    /// histories and both scores are updated together.
    pub fn play_round(&mut self) -> Result<RoundResult> {
        if self.is_complete() {
            return Err(ArenaError::MatchCompleted {
                rounds: self.round_count,
            });
        }
        debug_assert_eq!(self.history_a.len(), self.history_b.len());

        let round = self.rounds_played();
        let mut rng_a = self.rng.for_decision(round, Seat::First);
        let mut rng_b = self.rng.for_decision(round, Seat::Second);

        let move_a = self
            .strategy_a
            .decide(&self.history_a, &self.history_b, &mut rng_a);
        let move_b = self
            .strategy_b
            .decide(&self.history_b, &self.history_a, &mut rng_b);

        let (score_a, score_b) = self.payoffs.payoff(move_a, move_b);
        self.score_a += score_a as i64;
        self.score_b += score_b as i64;
        self.history_a.push(move_a);
        self.history_b.push(move_b);

        let result = RoundResult {
            round,
            move_a,
            move_b,
            score_a,
            score_b,
            cumulative_a: self.score_a,
            cumulative_b: self.score_b,
        };
        trace!(round, %move_a, %move_b, score_a, score_b, "round played");
        self.rounds.push(result.clone());
        Ok(result)
    }

    /// Play every remaining round and return the final `(score_a, score_b)`.
    ///
    /// On a fresh match this plays exactly `round_count` rounds. Calling it
    /// again afterwards fails with [`ArenaError::MatchCompleted`].
    pub fn play_match(&mut self) -> Result<(i64, i64)> {
        if self.is_complete() {
            return Err(ArenaError::MatchCompleted {
                rounds: self.round_count,
            });
        }
        while !self.is_complete() {
            self.play_round()?;
        }
        Ok(self.scores())
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn rounds_played(&self) -> u32 {
        self.history_a.len() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.rounds_played() >= self.round_count
    }

    pub fn history_a(&self) -> &[Move] {
        &self.history_a
    }

    pub fn history_b(&self) -> &[Move] {
        &self.history_b
    }

    pub fn scores(&self) -> (i64, i64) {
        (self.score_a, self.score_b)
    }

    /// Snapshot of everything played so far
    pub fn result(&self) -> MatchResult {
        MatchResult {
            name_a: self.strategy_a.name(),
            name_b: self.strategy_b.name(),
            rounds: self.rounds.clone(),
            total_score_a: self.score_a,
            total_score_b: self.score_b,
        }
    }
}

/// Run a complete match and return its round-by-round record
pub fn run_match(
    strategy_a: &dyn Strategy,
    strategy_b: &dyn Strategy,
    payoffs: &PayoffMatrix,
    round_count: u32,
    seed: u64,
) -> Result<MatchResult> {
    let mut game = Match::new(strategy_a, strategy_b, payoffs, round_count)?.with_seed(seed);
    game.play_match()?;
    Ok(game.result())
}
