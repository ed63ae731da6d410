//! Round-robin tournament orchestration
//!
//! Every strategy plays every strategy, itself included, once per repeat
//! as player A and once as player B. Scores are recorded per strategy and
//! per (strategy, opponent), keyed by lineup position so two strategies
//! that happen to share a name are never merged.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::TournamentConfig;
use crate::error::{ArenaError, Result};
use crate::game::Match;
use crate::random::MatchRng;
use crate::strategy::Strategy;

/// Position of a strategy in the tournament lineup
pub type StrategyId = usize;

/// One scheduled match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pairing {
    pub trial: u32,
    pub first: StrategyId,
    pub second: StrategyId,
    /// Position in enumeration order; seeds the match's randomness
    pub match_index: u64,
}

/// Mean rounded to the nearest integer, halves to even.
///
/// Returns `None` for an empty slice.
pub fn rounded_mean(scores: &[i64]) -> Option<i64> {
    if scores.is_empty() {
        return None;
    }
    let n = scores.len() as i64;
    let sum: i64 = scores.iter().sum();
    let quotient = sum.div_euclid(n);
    let remainder = sum.rem_euclid(n);

    Some(match (2 * remainder).cmp(&n) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    })
}

/// Raw match scores gathered during one tournament run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreBook {
    totals: Vec<Vec<i64>>,
    versus: Vec<Vec<Vec<i64>>>,
}

impl ScoreBook {
    pub fn new(strategy_count: usize) -> Self {
        Self {
            totals: vec![Vec::new(); strategy_count],
            versus: vec![vec![Vec::new(); strategy_count]; strategy_count],
        }
    }

    pub fn strategy_count(&self) -> usize {
        self.totals.len()
    }

    /// Record a finished match between `a` (player A) and `b` (player B)
    pub fn record(&mut self, a: StrategyId, b: StrategyId, score_a: i64, score_b: i64) {
        self.totals[a].push(score_a);
        self.versus[a][b].push(score_a);
        self.totals[b].push(score_b);
        self.versus[b][a].push(score_b);
    }

    /// Every score `id` earned, in either seat
    pub fn scores(&self, id: StrategyId) -> &[i64] {
        &self.totals[id]
    }

    /// Every score `id` earned against `opponent`, in either seat
    pub fn scores_against(&self, id: StrategyId, opponent: StrategyId) -> &[i64] {
        &self.versus[id][opponent]
    }

    /// Ranked averages, best first. Ties keep lineup order.
    pub fn standings(&self, names: &[String]) -> Result<Vec<Standing>> {
        let mut standings = self
            .totals
            .iter()
            .enumerate()
            .map(|(id, scores)| -> Result<Standing> {
                let name = label(names, id);
                let average = rounded_mean(scores)
                    .ok_or_else(|| ArenaError::EmptyAggregate { strategy: name.clone() })?;
                Ok(Standing { id, name, average })
            })
            .collect::<Result<Vec<_>>>()?;

        standings.sort_by(|a, b| b.average.cmp(&a.average));
        Ok(standings)
    }

    /// Average score of each strategy against each opponent
    pub fn head_to_head(&self, names: &[String]) -> Result<HeadToHead> {
        let averages = self
            .versus
            .iter()
            .enumerate()
            .map(|(id, row)| {
                row.iter()
                    .enumerate()
                    .map(|(opponent, scores)| {
                        rounded_mean(scores).ok_or_else(|| ArenaError::EmptyAggregate {
                            strategy: format!("{} vs {}", label(names, id), label(names, opponent)),
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(HeadToHead {
            names: (0..self.strategy_count()).map(|id| label(names, id)).collect(),
            averages,
        })
    }
}

fn label(names: &[String], id: StrategyId) -> String {
    names
        .get(id)
        .cloned()
        .unwrap_or_else(|| format!("#{}", id))
}

/// A strategy's place in the final ranking
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub id: StrategyId,
    pub name: String,
    pub average: i64,
}

/// Pairwise average table: `averages[a][b]` is what `a` scored against `b`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub names: Vec<String>,
    pub averages: Vec<Vec<i64>>,
}

impl HeadToHead {
    pub fn get(&self, id: StrategyId, opponent: StrategyId) -> Option<i64> {
        self.averages.get(id)?.get(opponent).copied()
    }

    /// `(name, [(opponent name, average)])` in lineup order
    pub fn rows(&self) -> impl Iterator<Item = (&str, Vec<(&str, i64)>)> + '_ {
        self.names.iter().zip(&self.averages).map(move |(name, row)| {
            let cells = self
                .names
                .iter()
                .zip(row)
                .map(|(opponent, &average)| (opponent.as_str(), average))
                .collect();
            (name.as_str(), cells)
        })
    }
}

/// Everything a finished tournament produced
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TournamentResults {
    pub standings: Vec<Standing>,
    pub head_to_head: HeadToHead,
    #[serde(skip)]
    pub scores: ScoreBook,
}

/// A lineup plus the rules it plays under
pub struct Tournament {
    strategies: Vec<Box<dyn Strategy>>,
    config: TournamentConfig,
}

impl Tournament {
    pub fn new(strategies: Vec<Box<dyn Strategy>>, config: TournamentConfig) -> Result<Self> {
        if strategies.is_empty() {
            return Err(ArenaError::NoStrategies);
        }
        config.validate()?;
        Ok(Self { strategies, config })
    }

    pub fn strategies(&self) -> &[Box<dyn Strategy>] {
        &self.strategies
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn names(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// K × N²
    pub fn match_count(&self) -> u64 {
        let n = self.strategies.len() as u64;
        self.config.repeat as u64 * n * n
    }

    /// Every match in play order: trial, then player A, then player B
    pub fn pairings(&self) -> impl Iterator<Item = Pairing> {
        let n = self.strategies.len();
        let repeat = self.config.repeat;
        (0..repeat)
            .flat_map(move |trial| {
                (0..n).flat_map(move |first| (0..n).map(move |second| (trial, first, second)))
            })
            .enumerate()
            .map(|(index, (trial, first, second))| Pairing {
                trial,
                first,
                second,
                match_index: index as u64,
            })
    }

    /// Play the full round-robin and aggregate the results.
    ///
    /// Every match starts from empty histories, so nothing carries over
    /// between repeats. Running twice with the same seed gives identical
    /// results.
    pub fn run(&self) -> Result<TournamentResults> {
        let names = self.names();
        info!(
            strategies = self.strategies.len(),
            rounds = self.config.rounds,
            repeat = self.config.repeat,
            matches = self.match_count(),
            "starting tournament"
        );

        let mut book = ScoreBook::new(self.strategies.len());
        for pairing in self.pairings() {
            let (a, b) = (pairing.first, pairing.second);
            let mut game = Match::new(
                self.strategies[a].as_ref(),
                self.strategies[b].as_ref(),
                &self.config.payoff,
                self.config.rounds,
            )?
            .with_rng(MatchRng::for_match(self.config.seed, pairing.match_index));

            let (score_a, score_b) = game.play_match()?;
            debug!(
                trial = pairing.trial,
                a = %names[a],
                b = %names[b],
                score_a,
                score_b,
                "match finished"
            );
            book.record(a, b, score_a, score_b);
        }

        let standings = book.standings(&names)?;
        let head_to_head = book.head_to_head(&names)?;
        if let Some(leader) = standings.first() {
            info!(leader = %leader.name, average = leader.average, "tournament finished");
        }

        Ok(TournamentResults {
            standings,
            head_to_head,
            scores: book,
        })
    }
}
