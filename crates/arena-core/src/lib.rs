//! Arena Core
//!
//! Game logic for the Iterated Prisoner's Dilemma:
//! - [`Strategy`]: the decision contract strategies implement
//! - [`Match`]: a fixed-length game between two strategies
//! - [`Tournament`]: a repeated round-robin with ranked averages
//!
//! Everything is deterministic for a given seed.

mod catalog;
mod config;
mod error;
mod game;
mod payoff;
mod random;
mod strategy;
mod tournament;

pub use catalog::{
    build_lineup, AlwaysCooperate, AlwaysDefect, Bully, FirmButFair, GrimTrigger, Joss, Prober,
    RandomChoice, ReverseTitForTat, Spoiler, StrategySpec, TitForTat, TitForTwoTats, TwoTitsForTat,
};
pub use config::TournamentConfig;
pub use error::{ArenaError, Result};
pub use game::{run_match, Match, MatchResult, RoundResult};
pub use payoff::{PayoffMatrix, Payoffs};
pub use random::{MatchRng, Seat};
pub use strategy::{Move, Strategy};
pub use tournament::{
    rounded_mean, HeadToHead, Pairing, ScoreBook, Standing, StrategyId, Tournament,
    TournamentResults,
};
