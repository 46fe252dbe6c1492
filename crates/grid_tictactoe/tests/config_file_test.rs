//! Tests for loading game configuration from disk.

use grid_tictactoe::{GameConfig, Session};
use std::io::Write;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "size = 5").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.size(), 5);
    assert_eq!(Session::new(config).board().len(), 25);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_zero_size_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "size = 0").unwrap();
    assert!(GameConfig::from_file(file.path()).is_err());
}
