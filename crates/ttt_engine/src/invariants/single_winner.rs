//! At most one player can own a winning line.

use super::Invariant;
use crate::types::{Board, Player};

/// Invariant: X and O never both have three in a row.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(board.has_won(Player::X) && board.has_won(Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
