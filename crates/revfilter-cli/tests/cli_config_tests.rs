// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for global flags and subcommand parsing
//!
//! These tests verify clap parsing, logging level selection and
//! configuration validation.

use std::path::PathBuf;

use clap::Parser;
use revfilter_cli::config::{Command, Config, ConfigError};
use tracing::Level;

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_short_flag_v() {
    let config = Config::try_parse_from(["revfilter", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert!(!config.quiet);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_long_flag() {
    let config = Config::try_parse_from(["revfilter", "--quiet"]).expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_verbose_flag_value_syntax_not_supported() {
    // Boolean flags are toggled by presence only
    let result = Config::try_parse_from(["revfilter", "--verbose=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

#[test]
fn test_global_flags_after_subcommand() {
    let config = Config::try_parse_from(["revfilter", "changes", "HEAD~1", "-q", "-C", "/tmp"])
        .expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.repo, Some(PathBuf::from("/tmp")));
}

#[test]
fn test_verbose_and_quiet_fail_validation() {
    let config = Config::try_parse_from(["revfilter", "-v", "-q"]).expect("parse should succeed");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ConflictingVerbosity)
    ));
}

// ============================================================================
// Repository path
// ============================================================================

#[test]
fn test_repo_flag() {
    let config =
        Config::try_parse_from(["revfilter", "-C", "/some/repo"]).expect("parse should succeed");
    assert_eq!(config.repo, Some(PathBuf::from("/some/repo")));
    assert_eq!(config.repo_path(), Some(PathBuf::from("/some/repo")));
}

#[test]
fn test_repo_must_be_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("not-a-dir");
    std::fs::write(&file, "x").unwrap();

    let config = Config {
        repo: Some(file),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::RepoNotDirectory(_))
    ));

    let config = Config {
        repo: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

// ============================================================================
// Subcommands
// ============================================================================

#[test]
fn test_changes_defaults_to_head() {
    let config = Config::try_parse_from(["revfilter", "changes"]).expect("parse should succeed");
    match config.command {
        Some(Command::Changes { revision, json }) => {
            assert_eq!(revision, "HEAD");
            assert!(!json);
        }
        other => panic!("Expected changes command, got {other:?}"),
    }
}

#[test]
fn test_log_with_all_filters() {
    let config = Config::try_parse_from([
        "revfilter",
        "log",
        "--from",
        "main",
        "-n",
        "5",
        "--signed-off-by",
        "Jane Doe <jane@example.com>",
        "--signed-off-by",
        "Sam Roe <sam@example.com>",
        "--grep",
        "^Fix",
        "--touches",
        "src/",
        "--json",
    ])
    .expect("parse should succeed");

    match config.command {
        Some(Command::Log {
            from,
            limit,
            signed_off_by,
            grep,
            touches,
            json,
        }) => {
            assert_eq!(from.as_deref(), Some("main"));
            assert_eq!(limit, Some(5));
            assert_eq!(
                signed_off_by,
                vec!["Jane Doe <jane@example.com>", "Sam Roe <sam@example.com>"]
            );
            assert_eq!(grep.as_deref(), Some("^Fix"));
            assert_eq!(touches.as_deref(), Some("src/"));
            assert!(json);
        }
        other => panic!("Expected log command, got {other:?}"),
    }
}

#[test]
fn test_log_rejects_non_numeric_limit() {
    let result = Config::try_parse_from(["revfilter", "log", "-n", "many"]);
    assert!(result.is_err());
}
