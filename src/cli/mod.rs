// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for incfix using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! incfix [global options] <command>
//! fix-limits [ROOT...] [--pattern GLOB]
//! update-includes [ROOT...] [--pattern GLOB]
//! rules [limits|lib]
//! options
//! inis
//! version
//!
//! fix-limits-include  [global options] [ROOT...]   (standalone)
//! update-lib-includes [global options] [ROOT...]   (standalone)
//! ```

pub mod global;
pub mod rewrite;


use crate::cli::global::GlobalOptions;
use crate::cli::rewrite::{RulesArgs, ToolArgs};
use clap::{Parser, Subcommand};

/// Bulk #include rewriting for header renames.
#[derive(Debug, Parser)]
#[command(
    name = "incfix",
    author,
    version,
    about = "Bulk #include rewriting for header renames",
    long_about = "incfix Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Rewrites #include directives after a header rename.\n\n\
                  `incfix fix-limits` turns #include \"limits.h\" into\n\
                  #include \"llimits.h\" under src/ and lib/. `incfix\n\
                  update-includes` applies the library header table under lib/.\n\
                  Every changed file is reported as `Updating ... in <path>`.",
    after_help = "CONFIG FILES:\n\n\
                  incfix reads `incfix.toml` from the current directory if it\n\
                  exists. Additional files can be given with --ini and are loaded\n\
                  after it. Use --no-default-inis to only use --ini. INCFIX_*\n\
                  environment variables (INCFIX_SECTION__KEY) and --set override\n\
                  every file."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by incfix.
    Inis,

    /// Prints a rule table.
    Rules(RulesArgs),

    /// Rewrites #include "limits.h" to #include "llimits.h".
    #[command(name = "fix-limits")]
    FixLimits(ToolArgs),

    /// Rewrites library header includes using the rename table.
    #[command(name = "update-includes")]
    UpdateIncludes(ToolArgs),
}

/// Command line of the standalone single-tool binaries.
///
/// Every argument is optional; running with none uses the configured roots.
#[derive(Debug, Parser)]
#[command(author, version)]
pub struct StandaloneCli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Tool options
    #[command(flatten)]
    pub tool: ToolArgs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
