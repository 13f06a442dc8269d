// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for incfix.

use crate::cli::rewrite::{RulesArgs, TableName};
use crate::config::Config;
use crate::error::Result;
use crate::rules::RuleTable;

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration files.
pub fn run_inis_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}

/// Display one or both rule tables.
///
/// # Errors
///
/// Returns an error if a configured mapping is invalid.
pub fn run_rules_command(args: &RulesArgs, config: &Config) -> Result<()> {
    for line in format_rules(args, config)? {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn format_rules(args: &RulesArgs, config: &Config) -> Result<Vec<String>> {
    let tables = match args.table {
        Some(TableName::Limits) => vec![config.limits_table()?],
        Some(TableName::Lib) => vec![config.lib_table()?],
        None => vec![config.limits_table()?, config.lib_table()?],
    };

    let mut lines = Vec::new();
    for (index, table) in tables.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(format_table(table));
    }
    Ok(lines)
}

fn format_table(table: &RuleTable) -> Vec<String> {
    let mut lines = vec![format!(
        "[{}] {} mapping(s), {} rule(s)",
        table.name(),
        table.mappings().len(),
        table.rules().len()
    )];
    lines.extend(table.format_mappings().into_iter().map(|line| format!("  {line}")));
    for hazard in table.chain_hazards() {
        lines.push(format!("  warning: {hazard}"));
    }
    lines
}
