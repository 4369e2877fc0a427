//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;
use ttt_engine::{Difficulty, Player as Mark};

/// Tic-Tac-Toe - play against a random or unbeatable computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent strength (easy or hard). Prompted for when omitted.
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Your mark (x or o). X always moves first.
    #[arg(short, long)]
    pub mark: Option<Mark>,

    /// Seed for the easy opponent's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
