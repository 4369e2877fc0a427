//! Turn loop for one game between the human and the computer.

use crate::config::GameConfig;
use crate::players::{ComputerPlayer, Console, HumanPlayer, Player};
use anyhow::{Result, anyhow, bail};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, error, info, instrument, warn};
use ttt_engine::{Board, Difficulty, Outcome, SearchEngine, check_board};

/// One game session: the board plus the terminal it is played on.
///
/// Configuration is fixed at construction; the difficulty, if not
/// configured, is asked for once before the first move.
pub struct GameSession<R, W> {
    config: GameConfig,
    board: Board,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a session with an empty board.
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        Self {
            config,
            board: Board::new(),
            input,
            output,
        }
    }

    /// Plays the game to the end and returns its outcome.
    #[instrument(skip(self), fields(human = %self.config.human_mark()))]
    pub fn run(&mut self) -> Result<Outcome> {
        let human_mark = *self.config.human_mark();
        let ai_mark = human_mark.opponent();

        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;
        writeln!(
            self.output,
            "You are playing as {}. The AI is playing as {}.",
            human_mark, ai_mark
        )?;

        let difficulty = match *self.config.difficulty() {
            Some(difficulty) => difficulty,
            None => self.prompt_difficulty()?,
        };
        let engine = match *self.config.seed() {
            Some(seed) => SearchEngine::seeded(difficulty, seed),
            None => SearchEngine::from_entropy(difficulty),
        };
        info!(%difficulty, %human_mark, "Game started");

        let mut human = HumanPlayer::new(human_mark);
        let mut computer = ComputerPlayer::new(ai_mark, engine);

        loop {
            let outcome = self.board.outcome();
            if outcome.is_over() {
                self.announce(outcome)?;
                return Ok(outcome);
            }

            let to_move = self.board.to_move();
            let player: &mut dyn Player = if to_move == human_mark {
                &mut human
            } else {
                &mut computer
            };

            let mut console = Console::new(&mut self.input, &mut self.output);
            let mv = player.choose_move(&mut self.board, &mut console)?;
            if self.board.is_occupied(mv) {
                bail!("{} chose occupied cell {}", player.name(), mv);
            }
            self.board.place(mv, player.mark());
            debug!(player = player.name(), %mv, "Move applied");

            check_board(&self.board).map_err(|violations| {
                error!(?violations, board = ?self.board, "Board invariant violated");
                anyhow!("Board invariant violated: {:?}", violations)
            })?;
        }
    }

    /// Asks for the opponent strength until a valid choice is entered.
    fn prompt_difficulty(&mut self) -> Result<Difficulty> {
        loop {
            writeln!(self.output, "Select AI difficulty:")?;
            for (i, difficulty) in Difficulty::iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, difficulty.label())?;
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed while selecting difficulty");
            }

            match Difficulty::from_choice(&line) {
                Some(difficulty) => return Ok(difficulty),
                None => {
                    warn!(input = %line.trim(), "Rejected difficulty choice");
                    writeln!(self.output, "Invalid choice. Try again.")?;
                }
            }
        }
    }

    /// Prints the result line and the final board.
    fn announce(&mut self, outcome: Outcome) -> Result<()> {
        let message = match outcome {
            Outcome::Won(mark) if mark == *self.config.human_mark() => "You win!",
            Outcome::Won(_) => "AI wins!",
            Outcome::Draw => "It's a tie!",
            Outcome::Ongoing => return Ok(()),
        };
        info!(?outcome, "Game over");
        writeln!(self.output, "{}", message)?;
        write!(self.output, "{}", self.board)?;
        self.output.flush()?;
        Ok(())
    }
}
