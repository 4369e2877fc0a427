//! Tic-Tac-Toe - console game against a random or minimax opponent.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_console::{Cli, GameConfig, GameSession};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::load(cli.config.as_deref())?.override_with(
        cli.difficulty,
        cli.mark,
        cli.seed,
    );
    info!(?config, "Starting Tic-Tac-Toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = GameSession::new(config, stdin.lock(), stdout.lock()).run()?;
    info!(?outcome, "Session finished");

    Ok(())
}
