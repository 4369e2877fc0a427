//! Console tic-tac-toe against the computer.
//!
//! # Architecture
//!
//! - **Cli/Config**: difficulty, marks and seed from flags and `tictactoe.toml`
//! - **Session**: the turn loop, owning the board and the terminal streams
//! - **Players**: the human at the prompt and the engine-backed computer
//!
//! # Example
//!
//! ```no_run
//! use ttt_console::{GameConfig, GameSession};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load(None)?;
//! let stdin = std::io::stdin();
//! GameSession::new(config, stdin.lock(), std::io::stdout()).run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod players;
mod session;

// Crate-level exports - Command line and configuration
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Input handling
pub use input::{InputError, parse_move};

// Crate-level exports - Players
pub use players::{ComputerPlayer, Console, HumanPlayer, Player};

// Crate-level exports - Session
pub use session::GameSession;
