//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::{Board, Outcome};
use tracing::instrument;

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

/// Derives the game outcome from board contents.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Won(player),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}
