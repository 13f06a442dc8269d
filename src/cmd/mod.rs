// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, inis, rules), rewrite (fix-limits, update-includes)
//!
//! GlobalOptions --> build_config_loader --> Config --> log_config
//! ```

pub mod config;
pub mod rewrite;


use crate::cli::global::GlobalOptions;
use crate::config::Config;
use crate::config::loader::ConfigLoader;
use crate::error::Result;
use crate::logging::LogConfig;

/// Config file picked up from the working directory.
pub const DEFAULT_INI: &str = "incfix.toml";

/// Environment variable prefix (`INCFIX_SECTION__KEY`).
pub const ENV_PREFIX: &str = "INCFIX";

/// Builds the layered config loader for the given global options.
///
/// # Errors
///
/// Returns an error if a `--set` option is not `section/key=value`.
pub fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_INI);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }

    loader
        .with_env_prefix(ENV_PREFIX)
        .apply_overrides(&global.to_config_overrides())
}

/// Loads the effective configuration.
///
/// # Errors
///
/// Returns an error if a config file is missing or invalid, or an override
/// is malformed.
pub fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?.build()
}

/// Logging setup from the `[global]` section.
#[must_use]
pub fn log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}
