//! Payoff matrix for the Prisoner's Dilemma

use serde::{Deserialize, Serialize};

use crate::strategy::Move;

/// Per-round payoffs for one (own, opponent) move pair: `(own, opponent)`
pub type Payoffs = (i32, i32);

/// 2×2 payoff table indexed by (own move, opponent move).
///
/// Each cell holds `(own_payoff, opponent_payoff)`, so the second player's
/// view is the same lookup with the arguments swapped. The table is never
/// mutated once a match holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    /// (Cooperate, Cooperate)
    pub mutual_cooperation: Payoffs,
    /// (Cooperate, Defect)
    pub sucker: Payoffs,
    /// (Defect, Cooperate)
    pub temptation: Payoffs,
    /// (Defect, Defect)
    pub mutual_defection: Payoffs,
}

impl PayoffMatrix {
    pub fn new(
        mutual_cooperation: Payoffs,
        sucker: Payoffs,
        temptation: Payoffs,
        mutual_defection: Payoffs,
    ) -> Self {
        Self {
            mutual_cooperation,
            sucker,
            temptation,
            mutual_defection,
        }
    }

    /// Build a symmetric game from the classic R, S, T, P values
    pub fn symmetric(reward: i32, sucker: i32, temptation: i32, punishment: i32) -> Self {
        Self::new(
            (reward, reward),
            (sucker, temptation),
            (temptation, sucker),
            (punishment, punishment),
        )
    }

    /// Returns (own_payoff, opponent_payoff)
    pub fn payoff(&self, own: Move, opponent: Move) -> Payoffs {
        match (own, opponent) {
            (Move::Cooperate, Move::Cooperate) => self.mutual_cooperation,
            (Move::Cooperate, Move::Defect) => self.sucker,
            (Move::Defect, Move::Cooperate) => self.temptation,
            (Move::Defect, Move::Defect) => self.mutual_defection,
        }
    }

    /// True when swapping the players swaps the payoffs in every cell
    pub fn is_symmetric(&self) -> bool {
        let swap = |(a, b): Payoffs| (b, a);
        self.mutual_cooperation.0 == self.mutual_cooperation.1
            && self.mutual_defection.0 == self.mutual_defection.1
            && self.sucker == swap(self.temptation)
    }
}

impl Default for PayoffMatrix {
    /// C/C = (2,2), D/D = (1,1), a lone defector takes 5 and leaves 0
    fn default() -> Self {
        Self::symmetric(2, 0, 5, 1)
    }
}
