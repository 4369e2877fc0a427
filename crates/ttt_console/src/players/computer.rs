//! Computer player backed by the search engine.

use super::{Console, Player};
use anyhow::{Result, anyhow};
use derive_new::new;
use rand::Rng;
use tracing::{debug, instrument};
use ttt_engine::{Board, Move, Player as Mark, SearchEngine};

/// Computer opponent using random or minimax move selection.
#[derive(Debug, new)]
pub struct ComputerPlayer<R> {
    mark: Mark,
    engine: SearchEngine<R>,
}

impl<R: Rng> Player for ComputerPlayer<R> {
    #[instrument(skip_all, fields(mark = %self.mark))]
    fn choose_move(&mut self, board: &mut Board, console: &mut Console<'_>) -> Result<Move> {
        let mv = self
            .engine
            .choose_move(board, self.mark)
            .ok_or_else(|| anyhow!("No empty cell left for the computer"))?;
        debug!(%mv, difficulty = %self.engine.difficulty(), "Computer chose move");
        writeln!(
            console.output(),
            "AI plays row {}, column {}.",
            mv.row(),
            mv.col()
        )?;
        Ok(mv)
    }

    fn name(&self) -> &str {
        "AI"
    }

    fn mark(&self) -> Mark {
        self.mark
    }
}
