// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `fix-limits-include`: rewrites `#include "limits.h"` to
//! `#include "llimits.h"` under `src` and `lib`.

use std::process::ExitCode;

use clap::Parser;
use incfix::cli::StandaloneCli;
use incfix::cmd::rewrite::run_fix_limits_command;
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

    match run_fix_limits_command(&cli.tool, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
