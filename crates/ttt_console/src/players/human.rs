//! Human player reading moves from the console.

use super::{Console, Player};
use crate::input::parse_move;
use anyhow::{Result, bail};
use derive_new::new;
use tracing::{debug, warn};
use ttt_engine::{Board, Move, Player as Mark};

/// Human player typing `row col` at a prompt.
#[derive(Debug, Clone, new)]
pub struct HumanPlayer {
    mark: Mark,
}

impl Player for HumanPlayer {
    fn choose_move(&mut self, board: &mut Board, console: &mut Console<'_>) -> Result<Move> {
        loop {
            let out = console.output();
            write!(out, "{}", board)?;
            write!(out, "Your move (row [0-2] and column [0-2]): ")?;
            out.flush()?;

            let Some(line) = console.read_line()? else {
                bail!("Input closed while waiting for a move");
            };

            match parse_move(&line, board) {
                Ok(mv) => {
                    debug!(mark = %self.mark, %mv, "Human chose move");
                    return Ok(mv);
                }
                Err(e) => {
                    warn!(error = %e, input = %line.trim(), "Rejected move");
                    writeln!(console.output(), "Invalid move. Try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "You"
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
