// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!        main.rs / bin/fix_limits_include.rs / bin/update_lib_includes.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          rewrite / options / rules
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             discovery     rules   rewrite
//!            walk / find   tables   literal substitution
//!
//!   +-----------------------------------------+
//!   |  foundation  error, logging, utility    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod rewrite;
pub mod rules;
pub mod utility;
