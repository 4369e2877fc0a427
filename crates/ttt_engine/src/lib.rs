//! Tic-tac-toe engine - board state, rules and a computer opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s with pure evaluation (win, draw,
//!   outcome). Outcomes are always derived from cells, never stored.
//! - **Invariants**: first-class board properties checked after each ply.
//! - **Search**: exhaustive minimax ([`choose_optimal_move`]) and uniform
//!   random selection ([`choose_random_move`]), bundled by [`SearchEngine`].
//!
//! # Example
//!
//! ```
//! use ttt_engine::{Board, Difficulty, Move, Player, SearchEngine};
//!
//! let mut board = Board::new();
//! board.place(Move::CENTER, Player::X);
//!
//! let mut engine = SearchEngine::seeded(Difficulty::Hard, 0);
//! let reply = engine.choose_move(&mut board, Player::O).unwrap();
//! assert!(Move::CORNERS.contains(&reply));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod invariants;
mod kani_support;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - Core types
pub use error::{BoardParseError, MoveError};
pub use position::Move;
pub use types::{Board, Cell, Outcome, Player};

// Crate-level exports - Rules
pub use rules::{LINES, has_won, is_draw, outcome, winner};

// Crate-level exports - Invariants
pub use invariants::{
    BalancedMarksInvariant, BoardInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleWinnerInvariant, check_board,
};

// Crate-level exports - Search
pub use search::{
    DRAW_SCORE, Difficulty, LOSS_SCORE, MAX_DEPTH, Minimax, SearchEngine, SearchReport,
    Speculation, WIN_SCORE, analyze, choose_optimal_move, choose_random_move, evaluate,
};
