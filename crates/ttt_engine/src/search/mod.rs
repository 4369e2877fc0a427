//! Computer move selection: exhaustive minimax or uniform random.

pub mod engine;
pub mod minimax;
pub mod random;
pub mod speculation;

pub use engine::{Difficulty, SearchEngine};
pub use minimax::{
    DRAW_SCORE, LOSS_SCORE, MAX_DEPTH, Minimax, SearchReport, WIN_SCORE, analyze,
    choose_optimal_move, evaluate,
};
pub use random::choose_random_move;
pub use speculation::Speculation;
