// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for incfix.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. incfix.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. INCFIX_* env vars
//! 5. CLI overrides (--set, --dry, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! INCFIX_GLOBAL__DRY=true            → global.dry = true
//! INCFIX_DISCOVERY__BACKEND=find     → discovery.backend = "find"
//! INCFIX_ENCODING__ON_INVALID=replace → encoding.on_invalid = "replace"
//! ```
//!
//! # Example
//!
//! ```toml
//! [lib]
//! roots = ["lib", "include"]
//!
//! [[lib.mappings]]
//! from = "luaconf.h"
//! to = "conf.h"
//! angle = false
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, IncfixResult, Result};
use crate::rewrite::RewriteOptions;
use crate::rules::{IncludeMapping, IncludeStyle, LIB_HEADER_RENAMES, RuleTable};
use crate::utility::fs::walk::WalkOptions;

use loader::ConfigLoader;
use types::{DiscoveryConfig, EncodingConfig, GlobalConfig, LibConfig, LimitsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// File discovery.
    pub discovery: DiscoveryConfig,
    /// Text encoding.
    pub encoding: EncodingConfig,
    /// `limits.h` normalizer.
    pub limits: LimitsConfig,
    /// Library header table.
    pub lib: LibConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use incfix::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("incfix.toml")
    ///     .with_env_prefix("INCFIX")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks root lists and builds both rule tables so bad settings fail at
    /// load time.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an empty root list, invalid header names or
    /// duplicate mappings.
    pub fn validate(&self) -> IncfixResult<()> {
        for (section, roots) in [("limits", &self.limits.roots), ("lib", &self.lib.roots)] {
            if roots.is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: section.to_string(),
                    key: "roots".to_string(),
                    message: "at least one root directory is required".to_string(),
                }
                .into());
            }
        }
        self.limits_table()?;
        self.lib_table()?;
        Ok(())
    }

    /// The `limits` rule table with configured header names.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a header name is invalid.
    pub fn limits_table(&self) -> IncfixResult<RuleTable> {
        RuleTable::new(
            "limits",
            "limits include",
            vec![IncludeMapping::new(
                self.limits.from.clone(),
                self.limits.to.clone(),
                IncludeStyle::QUOTED,
            )],
        )
    }

    /// The `lib` rule table: built-in pairs (unless replaced) followed by
    /// configured mappings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a header name is invalid or an old name
    /// appears twice.
    pub fn lib_table(&self) -> IncfixResult<RuleTable> {
        if !self.lib.replace_defaults && self.lib.mappings.is_empty() {
            return Ok(RuleTable::lib());
        }

        let defaults: &[(&str, &str)] = if self.lib.replace_defaults {
            &[]
        } else {
            &LIB_HEADER_RENAMES
        };

        let mappings = defaults
            .iter()
            .map(|(old, new)| IncludeMapping::new(*old, *new, IncludeStyle::all()))
            .chain(self.lib.mappings.iter().map(types::MappingEntry::to_mapping))
            .collect();

        RuleTable::new("lib", "includes", mappings)
    }

    /// Walker options derived from `[discovery]`.
    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::builder()
            .with_follow_links(self.discovery.follow_links)
            .with_include_hidden(self.discovery.include_hidden)
            .with_respect_gitignore(self.discovery.respect_gitignore)
            .with_skip_dirs(self.discovery.skip_dirs.clone())
            .build()
    }

    /// File read/write options derived from `[encoding]` and `global.dry`.
    #[must_use]
    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions::builder()
            .with_encoding(self.encoding.encoding)
            .with_decode_policy(self.encoding.on_invalid)
            .with_dry_run(self.global.dry)
            .build()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_discovery_options(&mut options);
        self.format_tool_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_discovery_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "discovery.backend".into(),
            self.discovery.backend.to_string(),
        );
        options.insert(
            "discovery.follow_links".into(),
            self.discovery.follow_links.to_string(),
        );
        options.insert(
            "discovery.include_hidden".into(),
            self.discovery.include_hidden.to_string(),
        );
        options.insert(
            "discovery.respect_gitignore".into(),
            self.discovery.respect_gitignore.to_string(),
        );
        if !self.discovery.skip_dirs.is_empty() {
            options.insert(
                "discovery.skip_dirs".into(),
                self.discovery.skip_dirs.join(", "),
            );
        }
        options.insert(
            "encoding.encoding".into(),
            self.encoding.encoding.to_string(),
        );
        options.insert(
            "encoding.on_invalid".into(),
            self.encoding.on_invalid.to_string(),
        );
    }

    fn format_tool_options(&self, options: &mut BTreeMap<String, String>) {
        let roots = |r: &[PathBuf]| {
            r.iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        options.insert("limits.roots".into(), roots(&self.limits.roots));
        options.insert("limits.pattern".into(), self.limits.pattern.clone());
        options.insert("limits.from".into(), self.limits.from.clone());
        options.insert("limits.to".into(), self.limits.to.clone());

        options.insert("lib.roots".into(), roots(&self.lib.roots));
        options.insert("lib.pattern".into(), self.lib.pattern.clone());
        options.insert(
            "lib.replace_defaults".into(),
            self.lib.replace_defaults.to_string(),
        );
        options.insert(
            "lib.mappings".into(),
            self.lib.mappings.len().to_string(),
        );
    }
}
