//! Error types for match and tournament construction

use thiserror::Error;

/// Everything that can go wrong while setting up or running a tournament.
///
/// There is no transient failure class here: no I/O, no network. Every
/// variant is a caller mistake and is surfaced as-is.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("round count must be at least 1")]
    InvalidRounds,

    #[error("repeat count must be at least 1")]
    InvalidRepeat,

    #[error("a tournament needs at least one strategy")]
    NoStrategies,

    #[error("match already played all {rounds} rounds")]
    MatchCompleted { rounds: u32 },

    #[error("no scores recorded for {strategy}")]
    EmptyAggregate { strategy: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
