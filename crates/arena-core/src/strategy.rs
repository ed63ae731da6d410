//! Moves and the strategy contract

use core::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    pub fn is_defect(self) -> bool {
        self == Move::Defect
    }

    /// The other move.
    pub fn flip(self) -> Move {
        match self {
            Move::Cooperate => Move::Defect,
            Move::Defect => Move::Cooperate,
        }
    }

    /// `Defect` when `defect` is true.
    pub fn defect_if(defect: bool) -> Move {
        if defect {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Cooperate => f.write_str("C"),
            Move::Defect => f.write_str("D"),
        }
    }
}

/// A decision policy for the iterated game.
///
/// `decide` is called once per round, before that round's moves are
/// recorded. Both histories hold only completed rounds and always have the
/// same length: a strategy picking its k-th move sees exactly the first
/// k-1 moves of each side, and never the opponent's simultaneous move.
///
/// Any configuration is fixed at construction. Stochastic strategies draw
/// from `rng`, which the match derives per round and per seat so that a
/// tournament seed reproduces every decision.
pub trait Strategy {
    /// Choose this round's move.
    ///
    /// # Arguments
    /// * `own` - Our past moves, oldest first
    /// * `opponent` - Opponent's past moves, oldest first
    /// * `rng` - Randomness for this decision only
    fn decide(&self, own: &[Move], opponent: &[Move], rng: &mut dyn RngCore) -> Move;

    /// Display label. Not required to be unique within a tournament.
    fn name(&self) -> String;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn decide(&self, own: &[Move], opponent: &[Move], rng: &mut dyn RngCore) -> Move {
        (**self).decide(own, opponent, rng)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn decide(&self, own: &[Move], opponent: &[Move], rng: &mut dyn RngCore) -> Move {
        (**self).decide(own, opponent, rng)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
