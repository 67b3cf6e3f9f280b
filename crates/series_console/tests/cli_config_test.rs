//! Tests for config loading and command-line overrides.

use clap::Parser;
use series_console::{Cli, SeriesConfig};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SeriesConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, SeriesConfig::default());
}

#[test]
fn test_from_file() {
    let file = write_config("board_size = 4\nwinning_score = 3\nthink_delay_ms = 0\nseed = 11\n");
    let config = SeriesConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 4);
    assert_eq!(*config.winning_score(), 3);
    assert_eq!(*config.think_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(11));
    assert_eq!(config.series_length(), 5);
}

#[test]
fn test_invalid_file_reports_parse_error() {
    let file = write_config("board_size = \"three\"\n");
    let err = SeriesConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_file_with_zero_winning_score_rejected() {
    let file = write_config("winning_score = 0\n");
    assert!(SeriesConfig::from_file(file.path()).is_err());
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("board_size = 4\nwinning_score = 3\n");
    let path = file.path().to_str().unwrap().to_string();
    let cli = Cli::try_parse_from([
        "series", "--config", path.as_str(), "--size", "5", "--delay-ms", "0", "--seed", "3",
    ])
    .unwrap();

    let config = cli.resolve_config().unwrap();
    assert_eq!(*config.board_size(), 5);
    assert_eq!(*config.winning_score(), 3);
    assert_eq!(*config.think_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(3));
}

#[test]
fn test_cli_rejects_zero_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("series.toml");
    let cli = Cli::try_parse_from([
        "series",
        "--config",
        path.to_str().unwrap(),
        "--size",
        "0",
    ])
    .unwrap();
    assert!(cli.resolve_config().is_err());
}
