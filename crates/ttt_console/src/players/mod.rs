//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use std::io::{BufRead, Write};
use ttt_engine::{Board, Move, Player as Mark};

/// Line-oriented terminal handles shared by the players of a session.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    /// Wraps an input and an output stream.
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Reads one line, or `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// The output stream.
    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }
}

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The returned cell is empty on `board`. Implementations may mutate
    /// the board while deciding but must leave it as they found it.
    fn choose_move(&mut self, board: &mut Board, console: &mut Console<'_>) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the mark this player places.
    fn mark(&self) -> Mark;
}
