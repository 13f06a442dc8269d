// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!         IncfixError (~24 bytes)
//!                 |
//!   +--------+----+----+-------+------+
//!   |        |         |       |      |
//!   v        v         v       v      v
//! Discovery Process   Cfg     Fs    Other
//!   Box      Box      Box     Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Discovery NoRoots, RootNotFound, NotADirectory, InvalidPattern, Walk
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Config    ParseError, InvalidValue
//!   Fs        ReadFailed, WriteFailed
//! ```
//!
//! Undecodable file content is never an error; see
//! [`crate::utility::encoding`].

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`IncfixError`].
pub type IncfixResult<T> = std::result::Result<T, IncfixError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum IncfixError {
    /// File discovery failed.
    #[error("discovery error: {0}")]
    Discovery(#[from] Box<DiscoveryError>),

    /// External process failed.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for IncfixError {
                fn from(err: $error) -> Self {
                    IncfixError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    DiscoveryError => Discovery,
    ProcessError => Process,
    ConfigError => Config,
    FsError => Fs,
}

// --- Discovery Errors ---

/// Errors raised while enumerating candidate files.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The root list is empty.
    #[error("no search roots given")]
    NoRoots,

    /// A search root does not exist.
    #[error("search root does not exist: {path}")]
    RootNotFound { path: String },

    /// A search root exists but is not a directory.
    #[error("search root is not a directory: {path}")]
    NotADirectory { path: String },

    /// The file-name pattern could not be compiled.
    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Traversal failed below a root.
    #[error("failed to walk '{root}': {message}")]
    Walk { root: String, message: String },
}

// --- Process Errors ---

/// External process errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Reading a source file failed.
    #[error("failed to read '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a rewritten file back failed.
    #[error("failed to write '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
