//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Nothing here stores results: the
//! outcome of a game is always recomputed from the cells.

pub mod draw;
pub mod win;

pub use draw::{is_draw, outcome};
pub use win::{LINES, has_won, winner};

use crate::types::{Board, Outcome, Player};

impl Board {
    /// Returns true iff `player` owns a complete row, column or diagonal.
    pub fn has_won(&self, player: Player) -> bool {
        has_won(self, player)
    }

    /// Returns the player with three in a row, if any.
    pub fn winner(&self) -> Option<Player> {
        winner(self)
    }

    /// Derives the current outcome.
    pub fn outcome(&self) -> Outcome {
        outcome(self)
    }
}
