// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  find_files()   ignore::Walk, sorted, wax file-name glob
//!        WalkOptions    links, hidden, gitignore, skip_dirs
//! ```

pub mod walk;

#[cfg(test)]
mod tests;
