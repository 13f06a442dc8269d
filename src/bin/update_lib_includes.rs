// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `update-lib-includes`: applies the library header rename table under `lib`,
//! in both quoted and angle-bracket form.

use std::process::ExitCode;

use clap::Parser;
use incfix::cli::StandaloneCli;
use incfix::cmd::rewrite::run_update_includes_command;
use incfix::cmd::{load_config, log_config};
use incfix::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = StandaloneCli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run_update_includes_command(&cli.tool, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
