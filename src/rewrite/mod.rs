// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Literal include rewriting.
//!
//! ```text
//! apply_rules(text, rules)        pure, no I/O
//!   for rule in rules (in order): replace every occurrence
//!   -> Rewrite { text, changed }
//!
//! rewrite_file(path, rules, opts)
//!   read --> decode (lossy) --> apply_rules
//!     unchanged --> FileOutcome::Unchanged (file untouched)
//!     changed   --> encode --> truncate + write --> FileOutcome::Updated
//!                   (write skipped on dry run)
//! ```
//!
//! Matching is plain substring search: no regex, no word boundaries, no
//! awareness of comments or string literals.

use bon::Builder;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, trace};

use crate::error::{FsError, IncfixResult};
use crate::rules::Rule;
use crate::utility::encoding::{DecodePolicy, Encoding, decode, encode};

/// Result of applying a rule list to a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    text: Cow<'a, str>,
    changed: bool,
}

impl<'a> Rewrite<'a> {
    /// Returns the rewritten text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text differs from the input.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.changed
    }

    #[must_use]
    pub fn into_text(self) -> Cow<'a, str> {
        self.text
    }
}

/// Applies every rule, in order, to `text`.
///
/// Each rule replaces all occurrences of its pattern in the output of the
/// previous rule. Text is only copied once a rule actually matches.
///
/// # Example
/// ```
/// use incfix::rewrite::apply_rules;
/// use incfix::rules::RuleTable;
///
/// let source = "#include \"lapi.h\"\n#include <lgc.h>\n";
/// let rewrite = apply_rules(source, RuleTable::lib().rules());
/// assert!(rewrite.changed());
/// assert_eq!(rewrite.text(), "#include \"api.h\"\n#include <gc.h>\n");
/// ```
#[must_use]
pub fn apply_rules<'a>(text: &'a str, rules: &[Rule]) -> Rewrite<'a> {
    let mut current = Cow::Borrowed(text);
    for rule in rules {
        if current.contains(rule.pattern()) {
            trace!(pattern = rule.pattern(), "rule matched");
            current = Cow::Owned(current.replace(rule.pattern(), rule.replacement()));
        }
    }

    let changed = current != text;
    Rewrite {
        text: current,
        changed,
    }
}

/// How files are read and written.
#[derive(Debug, Clone, Copy, Default, Builder)]
pub struct RewriteOptions {
    #[builder(setters(name = with_encoding), default)]
    encoding: Encoding,
    #[builder(setters(name = with_decode_policy), default)]
    decode_policy: DecodePolicy,
    #[builder(setters(name = with_dry_run), default = false)]
    dry_run: bool,
}

impl RewriteOptions {
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[must_use]
    pub const fn decode_policy(&self) -> DecodePolicy {
        self.decode_policy
    }

    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one rule matched; the file was (or on a dry run, would be) rewritten.
    Updated,
    /// No rule matched; the file was not opened for writing.
    Unchanged,
}

/// Rewrites one file in place.
///
/// The file is read fully, transformed with [`apply_rules`], and written back
/// in full only when the text changed. The write truncates the file; a crash
/// mid-write can leave it partially written.
///
/// # Errors
///
/// Returns `FsError::ReadFailed` or `FsError::WriteFailed`. Undecodable bytes
/// are never an error.
pub fn rewrite_file(
    path: &Path,
    rules: &[Rule],
    options: &RewriteOptions,
) -> IncfixResult<FileOutcome> {
    let bytes = std::fs::read(path).map_err(|source| FsError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;

    let text = decode(options.encoding(), options.decode_policy(), &bytes);
    let rewrite = apply_rules(&text, rules);
    if !rewrite.changed() {
        return Ok(FileOutcome::Unchanged);
    }

    if options.dry_run() {
        debug!(path = %path.display(), "dry run, not writing");
        return Ok(FileOutcome::Updated);
    }

    let output = encode(options.encoding(), rewrite.text());
    std::fs::write(path, &output).map_err(|source| FsError::WriteFailed {
        path: path.display().to_string(),
        source,
    })?;

    Ok(FileOutcome::Updated)
}

#[cfg(test)]
mod tests;
