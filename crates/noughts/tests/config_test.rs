//! Tests for configuration loading.

use noughts::Config;
use noughts_core::Mark;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "think_delay_ms = 250\ncomputer_mark = \"X\"\nlog_file = \"/tmp/noughts-test.log\""
    )
    .unwrap();

    let config = Config::load_or_default(file.path()).unwrap();
    assert_eq!(config.think_delay(), Duration::from_millis(250));
    assert_eq!(*config.computer_mark(), Mark::X);
    assert_eq!(config.human_mark(), Mark::O);
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/noughts-test.log"));
}

#[test]
fn test_lowercase_mark_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_mark = \"x\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(*config.computer_mark(), Mark::X);
    assert_eq!(config.human_mark(), Mark::O);
}

#[test]
fn test_bad_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_mark = \"Z\"").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_field_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"hard\"").unwrap();

    assert!(Config::from_file(file.path()).is_err());
}
