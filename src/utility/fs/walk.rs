// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{DiscoveryError, IncfixResult};
use bon::Builder;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;
use wax::{Glob, Program};

/// Options for directory traversal.
///
/// Defaults mirror `find`: nothing is hidden, ignore files are not consulted.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = true)]
    include_hidden: bool,
    /// Respect .gitignore files
    #[builder(setters(name = with_respect_gitignore), default = false)]
    respect_gitignore: bool,
    /// Skip directories matching these names (exact match)
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Returns whether to follow symbolic links.
    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Returns whether to include hidden files/directories.
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Returns whether to respect .gitignore files.
    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    /// Returns the skip directories list.
    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }
}

/// Builds a sorted `WalkBuilder` with the given options, using `filter_entry`
/// for directory skipping.
pub(super) fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.standard_filters(false);
    builder.follow_links(options.follow_links());
    builder.hidden(!options.include_hidden());

    builder.git_ignore(options.respect_gitignore());
    builder.git_global(options.respect_gitignore());
    builder.git_exclude(options.respect_gitignore());

    // Directory listing order is platform dependent
    builder.sort_by_file_name(|a, b| a.cmp(b));

    if !options.skip_dirs().is_empty() {
        let skip_dirs: Arc<Vec<String>> = Arc::new(options.skip_dirs().to_vec());
        builder.filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && entry.depth() > 0
                && let Some(name) = entry.file_name().to_str()
                && skip_dirs.iter().any(|skip| skip == name)
            {
                return false;
            }
            true
        });
    }

    builder
}

/// Regular files, plus symlinks resolving to a file when links are not
/// followed (as `find` lists them).
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| {
        ft.is_file() || (ft.is_symlink() && entry.path().is_file())
    })
}

/// Finds files whose name matches a glob pattern under each root, in order.
///
/// The pattern is matched against the file name only, like `find -name`, so
/// `*.[ch]` selects C sources and headers at any depth.
///
/// # Errors
///
/// Returns an error if:
/// - A root directory does not exist.
/// - The glob pattern is invalid.
/// - Traversal fails for any entry below a root.
///
/// # Example
/// ```no_run
/// use incfix::utility::fs::walk::{find_files, WalkOptions};
/// use std::path::PathBuf;
///
/// let roots = [PathBuf::from("src"), PathBuf::from("lib")];
/// for file in find_files(&roots, "*.[ch]", &WalkOptions::default())? {
///     println!("{}", file.display());
/// }
/// # Ok::<(), incfix::error::IncfixError>(())
/// ```
pub fn find_files<P: AsRef<Path>>(
    roots: &[P],
    pattern: &str,
    options: &WalkOptions,
) -> IncfixResult<Vec<PathBuf>> {
    let glob = Glob::new(pattern).map_err(|e| DiscoveryError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for root in roots {
        let root = root.as_ref();
        if !root.exists() {
            return Err(DiscoveryError::RootNotFound {
                path: root.display().to_string(),
            }
            .into());
        }

        for entry in build_walker(root, options).build() {
            let entry = entry.map_err(|e| DiscoveryError::Walk {
                root: root.display().to_string(),
                message: e.to_string(),
            })?;

            if is_file_entry(&entry) && glob.is_match(Path::new(entry.file_name()))
            {
                trace!(path = %entry.path().display(), "matched");
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}
