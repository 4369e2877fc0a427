//! Board coordinates for tic-tac-toe moves.

use crate::error::MoveError;
use std::fmt;
use tracing::instrument;

/// A (row, column) coordinate on the board, both in `0..3`.
///
/// Coordinates can only be built through [`Move::new`] or the constants
/// below, so every `Move` is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    row: usize,
    col: usize,
}

pub(crate) const fn at(row: usize, col: usize) -> Move {
    Move { row, col }
}

impl Move {
    /// All 9 cells in row-major order.
    pub const ALL: [Move; 9] = [
        at(0, 0),
        at(0, 1),
        at(0, 2),
        at(1, 0),
        at(1, 1),
        at(1, 2),
        at(2, 0),
        at(2, 1),
        at(2, 2),
    ];

    /// The four corners.
    pub const CORNERS: [Move; 4] = [at(0, 0), at(0, 2), at(2, 0), at(2, 2)];

    /// The centre cell.
    pub const CENTER: Move = at(1, 1);

    /// Creates a move, rejecting coordinates outside the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < 3 && col < 3 {
            Ok(at(row, col))
        } else {
            Err(MoveError::OutOfRange { row, col })
        }
    }

    /// Row of the cell.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of the cell.
    pub fn col(self) -> usize {
        self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        let mv = Move::new(2, 1).unwrap();
        assert_eq!((mv.row(), mv.col()), (2, 1));
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(
            Move::new(3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert!(Move::new(0, 7).is_err());
    }

    #[test]
    fn test_all_is_row_major() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!((mv.row(), mv.col()), (i / 3, i % 3));
        }
        assert!(Move::CORNERS.iter().all(|mv| Move::ALL.contains(mv)));
    }
}
