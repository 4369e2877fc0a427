//! Difficulty-aware move selection.

use super::minimax::choose_optimal_move;
use super::random::choose_random_move;
use crate::position::Move;
use crate::types::{Board, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Strength of the computer opponent, chosen once per game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
    /// Exhaustive minimax; never loses.
    Hard,
}

impl Difficulty {
    /// Parses a menu answer: `1`/`2` or the difficulty name.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Difficulty::Easy),
            "2" => Some(Difficulty::Hard),
            other => other.parse().ok(),
        }
    }

    /// Label shown in menus.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Picks moves for the computer according to a fixed difficulty.
#[derive(Debug, Clone)]
pub struct SearchEngine<R> {
    difficulty: Difficulty,
    rng: R,
}

impl SearchEngine<StdRng> {
    /// Engine seeded from operating-system entropy.
    pub fn from_entropy(difficulty: Difficulty) -> Self {
        Self::new(difficulty, StdRng::from_entropy())
    }

    /// Engine with a reproducible random sequence.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::new(difficulty, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SearchEngine<R> {
    /// Creates an engine around an arbitrary random source.
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }

    /// The configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Chooses a move for `player`, whose opponent holds the other mark.
    ///
    /// Returns `None` only for a full board. Any speculative marks placed
    /// while searching are removed before returning.
    #[instrument(skip(self, board), fields(difficulty = %self.difficulty))]
    pub fn choose_move(&mut self, board: &mut Board, player: Player) -> Option<Move> {
        let choice = match self.difficulty {
            Difficulty::Easy => choose_random_move(board, &mut self.rng),
            Difficulty::Hard => choose_optimal_move(board, player, player.opponent()),
        };
        debug!(?choice, %player, "Engine chose move");
        choice
    }
}
