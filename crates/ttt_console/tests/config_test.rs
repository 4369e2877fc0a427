//! Tests for loading the game configuration from disk.

use std::io::Write;
use ttt_console::GameConfig;
use ttt_engine::{Difficulty, Player as Mark};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"hard\"").unwrap();
    writeln!(file, "human_mark = \"o\"").unwrap();
    writeln!(file, "seed = 11").unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();

    assert_eq!(*config.difficulty(), Some(Difficulty::Hard));
    assert_eq!(*config.human_mark(), Mark::O);
    assert_eq!(*config.seed(), Some(11));
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = GameConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_value_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"impossible\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
