//! Win detection logic for tic-tac-toe.

use crate::position::{Move, at};
use crate::types::{Board, Cell, Player};

/// The eight winning lines: rows, columns, then diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks whether `player` has three in a row.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|mv| board.get(*mv) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. X is reported first on (unreachable) boards where
/// both players own a line.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| has_won(board, *player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_winner_each_row() {
        for s in ["XXX|OO.|...", "OO.|XXX|...", "OO.|...|XXX"] {
            assert!(has_won(&board(s), Player::X), "{s}");
            assert!(!has_won(&board(s), Player::O), "{s}");
        }
    }

    #[test]
    fn test_winner_each_column() {
        for s in ["OX.|OX.|O..", "XO.|.O.|XOX", "X.O|X.O|..O"] {
            assert_eq!(winner(&board(s)), Some(Player::O), "{s}");
        }
    }

    #[test]
    fn test_winner_diagonals() {
        assert!(has_won(&board("X.O|.XO|..X"), Player::X));
        assert!(has_won(&board("X.O|XO.|O.."), Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board("XX.|OO.|...");
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board("XXO|OOX|XOX");
        assert_eq!(winner(&board), None);
    }
}
