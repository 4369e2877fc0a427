//! Error types for board construction and move validation.

use crate::position::Move;

/// Error that can occur when validating a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column lies outside `0..3`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),
}

impl std::error::Error for MoveError {}

/// Error returned when a board literal cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character other than `X`, `O`, `.`, `_` or `-`.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),

    /// Not exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}
