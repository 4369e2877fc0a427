//! Game configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};
use ttt_engine::{Difficulty, Player as Mark};

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for one game session, fixed once play starts.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Opponent strength. `None` asks the player before the first move.
    #[serde(default)]
    difficulty: Option<Difficulty>,

    /// Mark played by the human.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Seed for the easy opponent; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_human_mark() -> Mark {
    Mark::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            human_mark: default_human_mark(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line values on top of the file values.
    #[instrument(skip(self))]
    pub fn override_with(
        mut self,
        difficulty: Option<Difficulty>,
        human_mark: Option<Mark>,
        seed: Option<u64>,
    ) -> Self {
        if difficulty.is_some() {
            self.difficulty = difficulty;
        }
        if let Some(mark) = human_mark {
            self.human_mark = mark;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.difficulty(), None);
        assert_eq!(*config.human_mark(), Mark::X);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("difficulty = \"hard\"").unwrap();
        assert_eq!(*config.difficulty(), Some(Difficulty::Hard));
        assert_eq!(*config.human_mark(), Mark::X);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file: GameConfig =
            toml::from_str("difficulty = \"easy\"\nhuman_mark = \"o\"\nseed = 5").unwrap();
        let config = file.override_with(Some(Difficulty::Hard), None, Some(9));
        assert_eq!(*config.difficulty(), Some(Difficulty::Hard));
        assert_eq!(*config.human_mark(), Mark::O);
        assert_eq!(*config.seed(), Some(9));
    }

    #[test]
    fn test_setters_chain() {
        let config = GameConfig::default()
            .with_difficulty(Some(Difficulty::Easy))
            .with_human_mark(Mark::O);
        assert_eq!(*config.difficulty(), Some(Difficulty::Easy));
        assert_eq!(*config.human_mark(), Mark::O);
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom");
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().contains("boom"));
    }
}
