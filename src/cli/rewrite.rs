// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rewrite command arguments.
//!
//! ```text
//! fix-limits / update-includes [ROOT...] [-p GLOB]
//!   ROOT...   replaces the configured roots
//!   -p GLOB   replaces the configured file-name pattern
//! rules [limits|lib]
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments shared by both rewrite tools.
#[derive(Debug, Clone, Default, Args)]
pub struct ToolArgs {
    /// Directories to search instead of the configured roots.
    #[arg(value_name = "ROOT")]
    pub roots: Vec<PathBuf>,

    /// File-name glob instead of the configured pattern (e.g. '*.[ch]').
    #[arg(short = 'p', long = "pattern", value_name = "GLOB")]
    pub pattern: Option<String>,
}

/// Built-in rule table selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableName {
    /// `limits.h` normalizer table.
    Limits,
    /// Library header rename table.
    Lib,
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Args)]
pub struct RulesArgs {
    /// Table to print; both when omitted.
    #[arg(value_enum, value_name = "TABLE")]
    pub table: Option<TableName>,
}
