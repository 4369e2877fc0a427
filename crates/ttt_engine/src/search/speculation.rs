//! Scoped speculative placement.

use crate::position::Move;
use crate::types::{Board, Player};
use std::ops::{Deref, DerefMut};

/// A mark placed on a board for the lifetime of the guard.
///
/// Dropping the guard clears the cell again, so every return path out of a
/// search frame (including early exits) leaves the board as it found it.
/// Guards nest in strict stack order: the borrow checker prevents touching
/// an outer guard while an inner one is alive.
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> Speculation<'a> {
    /// Places `player`'s mark on an empty cell until the guard drops.
    pub fn place(board: &'a mut Board, mv: Move, player: Player) -> Self {
        board.place(mv, player);
        Self { board, mv }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.clear(self.mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_mark_visible_while_guard_lives() {
        let mut board = Board::new();
        {
            let guard = Speculation::place(&mut board, Move::CENTER, Player::X);
            assert_eq!(guard.get(Move::CENTER), Cell::Occupied(Player::X));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_nested_guards_unwind_in_order() {
        let mut board: Board = "X..|...|...".parse().unwrap();
        let before = board;
        {
            let mut outer = Speculation::place(&mut board, Move::CENTER, Player::O);
            {
                let inner = Speculation::place(&mut outer, Move::CORNERS[3], Player::X);
                assert_eq!(inner.moves_played(), 3);
            }
            assert_eq!(outer.moves_played(), 2);
        }
        assert_eq!(board, before);
    }
}
