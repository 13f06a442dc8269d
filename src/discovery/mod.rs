// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Candidate file discovery.
//!
//! ```text
//! discover(roots, pattern, backend)
//!   at least one root, each exists and is a directory   fatal otherwise
//!        |
//!   +----+-----------------------------+
//!   v                                  v
//! Walk (default)                     Find
//! ignore::Walk + wax glob            `find <roots..> -name <pattern>`
//! sorted per directory               stdout split on '\n', blanks dropped
//! symlinked files included           hidden/gitignore/skip_dirs: warn, ignored
//! ```
//!
//! An empty result is valid. Any traversal failure aborts the run before a
//! single file is rewritten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

use crate::error::{DiscoveryError, IncfixResult, ProcessError};
use crate::utility::fs::walk::{WalkOptions, find_files};

/// How candidate files are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-process directory walk.
    #[default]
    Walk,
    /// The system `find` utility.
    Find,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Walk => write!(f, "walk"),
            Self::Find => write!(f, "find"),
        }
    }
}

/// Returns every file under `roots` whose name matches `pattern`.
///
/// # Errors
///
/// Returns a `DiscoveryError` for an empty root list, a missing root, a root that is not a
/// directory, an invalid pattern or a traversal failure, and a `ProcessError`
/// when the `find` backend cannot run or exits non-zero.
pub fn discover<P: AsRef<Path>>(
    roots: &[P],
    pattern: &str,
    backend: Backend,
    walk_options: &WalkOptions,
) -> IncfixResult<Vec<PathBuf>> {
    if roots.is_empty() {
        return Err(DiscoveryError::NoRoots.into());
    }
    for root in roots {
        validate_root(root.as_ref())?;
    }

    let files = match backend {
        Backend::Walk => find_files(roots, pattern, walk_options)?,
        Backend::Find => {
            for option in unsupported_by_find(walk_options) {
                warn!(option, "not supported by the find backend, ignored");
            }
            find_with_command(roots, pattern, walk_options.follow_links())?
        }
    };

    debug!(count = files.len(), %backend, pattern, "discovered files");
    Ok(files)
}

/// Walk settings that `find` has no equivalent for and that differ from
/// their defaults.
pub(crate) fn unsupported_by_find(options: &WalkOptions) -> Vec<&'static str> {
    let mut ignored = Vec::new();
    if !options.include_hidden() {
        ignored.push("discovery.include_hidden");
    }
    if options.respect_gitignore() {
        ignored.push("discovery.respect_gitignore");
    }
    if !options.skip_dirs().is_empty() {
        ignored.push("discovery.skip_dirs");
    }
    ignored
}

fn validate_root(root: &Path) -> IncfixResult<()> {
    if !root.exists() {
        return Err(DiscoveryError::RootNotFound {
            path: root.display().to_string(),
        }
        .into());
    }
    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            path: root.display().to_string(),
        }
        .into());
    }
    Ok(())
}

fn find_with_command<P: AsRef<Path>>(
    roots: &[P],
    pattern: &str,
    follow_links: bool,
) -> IncfixResult<Vec<PathBuf>> {
    let program = which::which("find").map_err(|_| ProcessError::ExecutableNotFound {
        name: "find".to_string(),
    })?;

    let mut command = Command::new(&program);
    if follow_links {
        command.arg("-L");
    }
    for root in roots {
        let root: &Path = root.as_ref();
        command.arg(root);
    }
    command.arg("-name").arg(pattern);

    let shown = format!("{command:?}");
    debug!(command = %shown, "running find");

    let output = command
        .output()
        .map_err(|source| ProcessError::SpawnFailed {
            command: shown.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ProcessError::NonZeroExit {
            command: shown,
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    Ok(parse_find_output(&output.stdout))
}

/// Splits newline-delimited `find` output into paths, skipping blank lines.
pub(crate) fn parse_find_output(stdout: &[u8]) -> Vec<PathBuf> {
    String::from_utf8_lossy(stdout)
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
