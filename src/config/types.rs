// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for incfix.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, DiscoveryConfig, EncodingConfig, LimitsConfig, LibConfig
//! LibConfig.mappings: [{ from, to, quoted, angle }] appended to the built-in table
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::discovery::Backend;
use crate::logging::LogLevel;
use crate::rules::{IncludeMapping, IncludeStyle, LIMITS_HEADER_RENAME};
use crate::utility::encoding::{DecodePolicy, Encoding};

/// Default file-name pattern: C sources and headers.
pub const DEFAULT_PATTERN: &str = "*.[ch]";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Report what would change without writing any file.
    pub dry: bool,
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
        }
    }
}

/// File discovery options shared by both tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// `walk` (in-process) or `find` (system utility).
    pub backend: Backend,
    /// Follow symbolic links while traversing.
    pub follow_links: bool,
    /// Visit hidden files and directories (walk backend only).
    pub include_hidden: bool,
    /// Honour `.gitignore` files (walk backend only).
    pub respect_gitignore: bool,
    /// Directory names never descended into (walk backend only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skip_dirs: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Walk,
            follow_links: false,
            include_hidden: true,
            respect_gitignore: false,
            skip_dirs: Vec::new(),
        }
    }
}

/// Source text encoding options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodingConfig {
    /// Encoding used to read and write files.
    pub encoding: Encoding,
    /// Handling of invalid byte sequences.
    pub on_invalid: DecodePolicy,
}

/// `limits.h` normalizer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    /// Directories searched, in order.
    pub roots: Vec<PathBuf>,
    /// File-name glob.
    pub pattern: String,
    /// Header whose quoted include is rewritten.
    pub from: String,
    /// Replacement header name.
    pub to: String,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        let (from, to) = LIMITS_HEADER_RENAME;
        Self {
            roots: vec![PathBuf::from("src"), PathBuf::from("lib")],
            pattern: DEFAULT_PATTERN.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Library header table options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibConfig {
    /// Directories searched, in order.
    pub roots: Vec<PathBuf>,
    /// File-name glob.
    pub pattern: String,
    /// Drop the built-in 29 mappings and use only `mappings`.
    pub replace_defaults: bool,
    /// Extra mappings, applied after the built-in ones.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<MappingEntry>,
}

impl Default for LibConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("lib")],
            pattern: DEFAULT_PATTERN.to_string(),
            replace_defaults: false,
            mappings: Vec::new(),
        }
    }
}

/// One configured header rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingEntry {
    pub from: String,
    pub to: String,
    /// Rewrite `#include "from"`.
    #[serde(default = "default_true")]
    pub quoted: bool,
    /// Rewrite `#include <from>`.
    #[serde(default = "default_true")]
    pub angle: bool,
}

const fn default_true() -> bool {
    true
}

impl MappingEntry {
    /// Converts to a rule-table mapping.
    #[must_use]
    pub fn to_mapping(&self) -> IncludeMapping {
        let mut styles = IncludeStyle::empty();
        styles.set(IncludeStyle::QUOTED, self.quoted);
        styles.set(IncludeStyle::ANGLE, self.angle);
        IncludeMapping::new(self.from.clone(), self.to.clone(), styles)
    }
}
