// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rewrite commands.
//!
//! ```text
//! run_table(table, roots, pattern, config)
//!   chain_hazards --> warn!
//!   discover(roots, pattern) --> sorted files
//!   for file: rewrite_file --> Updated? --> "Updating <desc> in <path>"
//!   --> RunSummary { scanned, updated } (info!)
//! ```

use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cli::rewrite::ToolArgs;
use crate::config::Config;
use crate::discovery::discover;
use crate::error::Result;
use crate::rewrite::{FileOutcome, rewrite_file};
use crate::rules::RuleTable;

/// Counts for one run over a rule table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files matched by discovery.
    pub scanned: usize,
    /// Files that were (or on a dry run, would be) rewritten.
    pub updated: usize,
}

/// Runs the `limits` table over its configured roots, or `args.roots`.
///
/// # Errors
///
/// Returns an error if the table is invalid, discovery fails, or a file
/// cannot be read or written.
pub fn run_fix_limits_command(args: &ToolArgs, config: &Config) -> Result<RunSummary> {
    let table = config.limits_table()?;
    let (roots, pattern) = resolve_targets(args, &config.limits.roots, &config.limits.pattern);
    run_table(&table, roots, pattern, config)
}

/// Runs the `lib` table over its configured roots, or `args.roots`.
///
/// # Errors
///
/// Returns an error if the table is invalid, discovery fails, or a file
/// cannot be read or written.
pub fn run_update_includes_command(args: &ToolArgs, config: &Config) -> Result<RunSummary> {
    let table = config.lib_table()?;
    let (roots, pattern) = resolve_targets(args, &config.lib.roots, &config.lib.pattern);
    run_table(&table, roots, pattern, config)
}

fn resolve_targets<'a>(
    args: &'a ToolArgs,
    roots: &'a [PathBuf],
    pattern: &'a str,
) -> (&'a [PathBuf], &'a str) {
    let roots = if args.roots.is_empty() {
        roots
    } else {
        args.roots.as_slice()
    };
    (roots, args.pattern.as_deref().unwrap_or(pattern))
}

/// Applies `table` to every file under `roots` matching `pattern`, reporting
/// each changed file on stdout.
///
/// # Errors
///
/// Returns an error if discovery fails or a file cannot be read or written.
/// Files processed before the failure keep their new content.
pub fn run_table(
    table: &RuleTable,
    roots: &[PathBuf],
    pattern: &str,
    config: &Config,
) -> Result<RunSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_table_to(table, roots, pattern, config, &mut out)
}

/// [`run_table`] with the report written to `out`.
///
/// # Errors
///
/// Same as [`run_table`], plus failures writing the report.
pub fn run_table_to<W: Write>(
    table: &RuleTable,
    roots: &[PathBuf],
    pattern: &str,
    config: &Config,
    out: &mut W,
) -> Result<RunSummary> {
    for hazard in table.chain_hazards() {
        warn!(table = table.name(), "chained rename: {hazard}");
    }

    let files = discover(roots, pattern, config.discovery.backend, &config.walk_options())?;
    let options = config.rewrite_options();
    let suffix = if options.dry_run() { " (dry run)" } else { "" };

    let mut summary = RunSummary {
        scanned: files.len(),
        updated: 0,
    };

    for file in &files {
        debug!(path = %file.display(), "scanning");
        if rewrite_file(file, table.rules(), &options)? == FileOutcome::Updated {
            summary.updated += 1;
            report(out, table.description(), file, suffix)?;
        }
    }

    info!(
        table = table.name(),
        scanned = summary.scanned,
        updated = summary.updated,
        dry = options.dry_run(),
        "run complete"
    );
    Ok(summary)
}

fn report<W: Write>(out: &mut W, description: &str, path: &Path, suffix: &str) -> Result<()> {
    writeln!(out, "Updating {description} in {}{suffix}", path.display())
        .context("failed to write report")?;
    out.flush().context("failed to write report")
}
