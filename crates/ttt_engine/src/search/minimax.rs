//! Exhaustive minimax search for the optimal move.
//!
//! Scores are depth independent: every win is worth [`WIN_SCORE`] and every
//! loss [`LOSS_SCORE`] no matter how many plies away it is. Ties between
//! equally scored moves go to the first cell in row-major order.

use super::speculation::Speculation;
use crate::position::Move;
use crate::types::{Board, Player};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Score of a position the searching player has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a position the other player has won.
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn or undecided position.
pub const DRAW_SCORE: i32 = 0;
/// Number of plies after which the board is necessarily full.
pub const MAX_DEPTH: u32 = 9;

/// Static evaluation from `searching`'s point of view.
pub fn evaluate(board: &Board, searching: Player, other: Player) -> i32 {
    if board.has_won(searching) {
        WIN_SCORE
    } else if board.has_won(other) {
        LOSS_SCORE
    } else {
        DRAW_SCORE
    }
}

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SearchReport {
    /// The selected move.
    best_move: Move,
    /// Minimax value of the selected move.
    score: i32,
    /// Number of positions visited.
    nodes: u64,
}

/// Minimax searcher for a fixed pair of players.
#[derive(Debug, Clone)]
pub struct Minimax {
    searching: Player,
    other: Player,
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher maximizing for `searching` against `other`.
    pub fn new(searching: Player, other: Player) -> Self {
        Self {
            searching,
            other,
            nodes: 0,
        }
    }

    /// Positions visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `board`.
    ///
    /// `maximizing` tells whose ply it is: the searching player when true,
    /// the other player when false. The board is returned unchanged.
    pub fn search(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> i32 {
        self.nodes += 1;

        let score = evaluate(board, self.searching, self.other);
        if score != DRAW_SCORE {
            return score;
        }

        if depth == MAX_DEPTH || board.is_full() {
            return DRAW_SCORE;
        }

        let mark = if maximizing {
            self.searching
        } else {
            self.other
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in Move::ALL {
            if board.is_occupied(mv) {
                continue;
            }
            let mut speculative = Speculation::place(board, mv, mark);
            let value = self.search(&mut speculative, depth + 1, !maximizing);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }

    /// Scores every empty cell and keeps the first with the highest value.
    pub fn best_move(&mut self, board: &mut Board) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;

        for mv in Move::ALL {
            if board.is_occupied(mv) {
                continue;
            }
            let mut speculative = Speculation::place(board, mv, self.searching);
            let score = self.search(&mut speculative, 0, false);
            drop(speculative);

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best
    }
}

/// Runs a full search and reports the chosen move with its statistics.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board), fields(empty = board.empty_cells().len()))]
pub fn analyze(board: &mut Board, searching: Player, other: Player) -> Option<SearchReport> {
    let mut minimax = Minimax::new(searching, other);
    let (best_move, score) = minimax.best_move(board)?;
    let report = SearchReport {
        best_move,
        score,
        nodes: minimax.nodes(),
    };
    debug!(
        best_move = %report.best_move,
        score = report.score,
        nodes = report.nodes,
        "Search complete"
    );
    Some(report)
}

/// Selects the optimal move for `searching`.
///
/// The board is mutated during the search and restored before returning.
pub fn choose_optimal_move(board: &mut Board, searching: Player, other: Player) -> Option<Move> {
    analyze(board, searching, other).map(|report| *report.best_move())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_evaluate_scores() {
        let x_wins = board("XXX|OO.|...");
        assert_eq!(evaluate(&x_wins, Player::X, Player::O), WIN_SCORE);
        assert_eq!(evaluate(&x_wins, Player::O, Player::X), LOSS_SCORE);
        assert_eq!(evaluate(&Board::new(), Player::X, Player::O), DRAW_SCORE);
    }

    #[test]
    fn test_search_terminal_ignores_depth() {
        let mut won = board("OOO|XX.|X..");
        let mut minimax = Minimax::new(Player::O, Player::X);
        assert_eq!(minimax.search(&mut won, 0, true), WIN_SCORE);
        assert_eq!(minimax.search(&mut won, 7, false), WIN_SCORE);
        assert_eq!(minimax.nodes(), 2);
    }

    #[test]
    fn test_search_full_board_is_draw() {
        let mut full = board("XOX|OXX|OXO");
        let mut minimax = Minimax::new(Player::X, Player::O);
        assert_eq!(minimax.search(&mut full, 3, true), DRAW_SCORE);
        assert_eq!(minimax.search(&mut full, 3, false), DRAW_SCORE);
    }

    #[test]
    fn test_search_depth_limit_is_draw() {
        let mut open = Board::new();
        let mut minimax = Minimax::new(Player::X, Player::O);
        assert_eq!(minimax.search(&mut open, MAX_DEPTH, true), DRAW_SCORE);
        assert_eq!(open, Board::new());
    }

    #[test]
    fn test_last_cell_is_chosen() {
        let mut b = board("XOX|XOO|OX.");
        let report = analyze(&mut b, Player::X, Player::O).unwrap();
        assert_eq!(*report.best_move(), Move::new(2, 2).unwrap());
        assert_eq!(*report.score(), DRAW_SCORE);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut full = board("XOX|OXX|OXO");
        assert_eq!(choose_optimal_move(&mut full, Player::X, Player::O), None);
    }

    #[test]
    fn test_report_counts_nodes() {
        let mut b = board("XO.|XO.|...");
        let report = analyze(&mut b, Player::X, Player::O).unwrap();
        assert_eq!(*report.best_move(), Move::new(2, 0).unwrap());
        assert_eq!(*report.score(), WIN_SCORE);
        assert!(*report.nodes() >= 5);
    }
}
