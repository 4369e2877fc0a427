//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use crate::position::Move;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// 3x3 tic-tac-toe board, indexed by (row, column).
///
/// The board carries no turn or status fields: whose move it is and whether
/// the game is over are derived from the cells on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Returns the cell at the given coordinate.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Returns all rows.
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Returns true iff the cell holds a mark.
    pub fn is_occupied(&self, mv: Move) -> bool {
        self.get(mv) != Cell::Empty
    }

    /// Writes `player`'s mark into the cell.
    ///
    /// The cell must be empty; callers validate before placing.
    pub fn place(&mut self, mv: Move, player: Player) {
        debug_assert!(!self.is_occupied(mv), "placing on occupied cell {mv}");
        self.cells[mv.row()][mv.col()] = Cell::Occupied(player);
    }

    /// Resets the cell to empty.
    pub fn clear(&mut self, mv: Move) {
        self.cells[mv.row()][mv.col()] = Cell::Empty;
    }

    /// Returns true iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// Lists every empty cell in row-major order.
    #[instrument(level = "trace")]
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| !self.is_occupied(*mv))
            .collect()
    }

    /// Counts the marks placed by `player`.
    pub fn mark_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Number of plies played so far.
    pub fn moves_played(&self) -> usize {
        self.mark_count(Player::X) + self.mark_count(Player::O)
    }

    /// Player whose turn it is. X always opens.
    pub fn to_move(&self) -> Player {
        if self.mark_count(Player::X) > self.mark_count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            writeln!(f, " {} | {} | {} ", row[0], row[1], row[2])?;
            if i != 2 {
                writeln!(f, "---|---|---")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells of `X`, `O` and `.` (also `_` or `-` for empty).
    ///
    /// Whitespace and `|` separators are ignored, so both `"XO.|...|..X"`
    /// and a multi-line grid are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '_' | '-' => Cell::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
            if count >= 9 {
                return Err(BoardParseError::WrongLength(count + 1));
            }
            board.cells[count / 3][count % 3] = cell;
            count += 1;
        }
        if count != 9 {
            return Err(BoardParseError::WrongLength(count));
        }
        Ok(board)
    }
}

/// Result of the game, derived from board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Game is ongoing.
    Ongoing,
    /// Game ended in a win.
    Won(Player),
    /// Board is full and nobody has three in a row.
    Draw,
}

impl Outcome {
    /// Returns true if the game has ended.
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_place_then_clear_restores_board() {
        let mut board: Board = "X.O|.X.|...".parse().unwrap();
        let before = board;
        let mv = Move::new(2, 1).unwrap();

        board.place(mv, Player::O);
        assert!(board.is_occupied(mv));
        board.clear(mv);

        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "XOX|.O.|XX.".parse().unwrap();
        let empty: Vec<_> = board
            .empty_cells()
            .into_iter()
            .map(|mv| (mv.row(), mv.col()))
            .collect();
        assert_eq!(empty, vec![(1, 0), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_to_move_alternates() {
        let mut board = Board::new();
        assert_eq!(board.to_move(), Player::X);
        board.place(Move::CENTER, Player::X);
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(board.moves_played(), 1);
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X..|.O.|..X".parse().unwrap();
        let expected = " X |   |   \n---|---|---\n   | O |   \n---|---|---\n   |   | X \n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO?|...|...".parse::<Board>(),
            Err(BoardParseError::InvalidCell('?'))
        );
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!(
            "..........".parse::<Board>(),
            Err(BoardParseError::WrongLength(10))
        );
    }

    #[test]
    fn test_player_parses_case_insensitive() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
    }
}
