//! Uniform random move selection.

use crate::position::Move;
use crate::types::Board;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{instrument, trace};

/// Picks one of the empty cells uniformly at random.
///
/// Returns `None` when the board is full. The board is not modified.
#[instrument(skip(board, rng))]
pub fn choose_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    let choice = board.empty_cells().choose(rng).copied();
    trace!(?choice, "Random move");
    choice
}
