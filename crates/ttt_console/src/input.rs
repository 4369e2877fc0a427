//! Parsing and validating human move input.

use derive_more::{Display, From};
use tracing::instrument;
use ttt_engine::{Board, Move, MoveError};

/// Why a line of input was not accepted as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum InputError {
    /// Not two non-negative integers.
    #[display("Expected a row and a column, got {:?}", _0)]
    Malformed(String),

    /// Coordinates off the board or on an occupied cell.
    #[display("{}", _0)]
    #[from]
    Rejected(MoveError),
}

impl std::error::Error for InputError {}

/// Parses `"row col"` (whitespace or comma separated) into a move onto an
/// empty cell of `board`.
#[instrument(skip(board))]
pub fn parse_move(line: &str, board: &Board) -> Result<Move, InputError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    let [row, col] = tokens.as_slice() else {
        return Err(InputError::Malformed(line.trim().to_string()));
    };
    let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
        return Err(InputError::Malformed(line.trim().to_string()));
    };

    let mv = Move::new(row, col)?;
    if board.is_occupied(mv) {
        return Err(MoveError::Occupied(mv).into());
    }
    Ok(mv)
}
