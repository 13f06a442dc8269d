// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use incfix::cli::global::GlobalOptions;
use incfix::cli::rewrite::TableName;
use incfix::cli::{Cli, Command, StandaloneCli};
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["incfix", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["incfix", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Rewrite Commands
// =============================================================================

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["incfix"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_fix_limits_with_pattern() {
    let cli = Cli::try_parse_from(["incfix", "fix-limits", "--pattern", "*.h"]).unwrap();
    let Some(Command::FixLimits(args)) = cli.command else {
        panic!("expected fix-limits");
    };
    assert!(args.roots.is_empty());
    assert_eq!(args.pattern.as_deref(), Some("*.h"));
}

#[test]
fn cli_update_includes_with_root() {
    let cli = Cli::try_parse_from(["incfix", "update-includes", "lib"]).unwrap();
    let Some(Command::UpdateIncludes(args)) = cli.command else {
        panic!("expected update-includes");
    };
    assert_eq!(args.roots, vec![PathBuf::from("lib")]);
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["incfix", "build"]).is_err());
}

// =============================================================================
// Helper Commands
// =============================================================================

#[test]
fn cli_rules_without_table() {
    let cli = Cli::try_parse_from(["incfix", "rules"]).unwrap();
    let Some(Command::Rules(args)) = cli.command else {
        panic!("expected rules");
    };
    assert!(args.table.is_none());
}

#[test]
fn cli_rules_limits() {
    let cli = Cli::try_parse_from(["incfix", "rules", "limits"]).unwrap();
    let Some(Command::Rules(args)) = cli.command else {
        panic!("expected rules");
    };
    assert_eq!(args.table, Some(TableName::Limits));
}

#[test]
fn cli_options_and_inis() {
    assert!(matches!(
        Cli::try_parse_from(["incfix", "options"]).unwrap().command,
        Some(Command::Options)
    ));
    assert!(matches!(
        Cli::try_parse_from(["incfix", "inis"]).unwrap().command,
        Some(Command::Inis)
    ));
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_multiple_inis() {
    let cli = Cli::try_parse_from([
        "incfix",
        "-i",
        "base.toml",
        "--ini",
        "local.toml",
        "--no-default-inis",
        "options",
    ])
    .unwrap();
    assert_eq!(
        cli.global.inis,
        vec![PathBuf::from("base.toml"), PathBuf::from("local.toml")]
    );
    assert!(cli.global.no_default_inis);
}

#[test]
fn cli_file_log_level_overrides() {
    let global = GlobalOptions {
        log_level: Some(2),
        file_log_level: Some(5),
        ..Default::default()
    };
    insta::assert_snapshot!(global.to_config_overrides().join("\n"), @r"
    global/output_log_level=2
    global/file_log_level=5
    ");
}

#[test]
fn cli_invalid_backend_rejected() {
    assert!(Cli::try_parse_from(["incfix", "--backend", "rg", "fix-limits"]).is_err());
}

// =============================================================================
// Standalone Binaries
// =============================================================================

#[test]
fn standalone_pattern_and_dry() {
    let cli = StandaloneCli::try_parse_from(["fix-limits-include", "--dry", "-p", "*.c"]).unwrap();
    assert!(cli.global.dry);
    assert_eq!(cli.tool.pattern.as_deref(), Some("*.c"));
    assert_eq!(cli.global.to_config_overrides(), vec!["global/dry=true"]);
}

#[test]
fn standalone_rejects_unknown_flag() {
    assert!(StandaloneCli::try_parse_from(["update-lib-includes", "--bogus"]).is_err());
}
