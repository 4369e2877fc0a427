//! Balanced marks invariant: players alternate, X first.

use super::Invariant;
use crate::types::{Board, Player};

/// Invariant: X has placed as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.mark_count(Player::X);
        let o = board.mark_count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Players alternate turns (X count equals O count or exceeds it by one)"
    }
}
