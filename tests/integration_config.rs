// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use incfix::config::Config;
use incfix::discovery::Backend;
use incfix::rules::IncludeStyle;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_defaults_serialize() {
    let config = Config::parse("").unwrap();
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["global"]["dry"], false);
    assert_eq!(value["global"]["output_log_level"], 3);
    assert_eq!(value["discovery"]["backend"], "walk");
    assert_eq!(value["encoding"]["on_invalid"], "ignore");
    assert_eq!(value["limits"]["roots"], serde_json::json!(["src", "lib"]));
    assert_eq!(value["lib"]["roots"], serde_json::json!(["lib"]));
    assert!(value["lib"].get("mappings").is_none());
}

#[test]
fn config_parse_full_file() {
    let toml = r#"
[global]
dry = true
output_log_level = 2

[discovery]
backend = "find"
follow_links = true

[encoding]
encoding = "oem"

[limits]
roots = ["core"]

[lib]
roots = ["lib", "include"]
pattern = "*.h"

[[lib.mappings]]
from = "luaconf.h"
to = "conf.h"
quoted = true
angle = false
"#;
    let config = Config::parse(toml).unwrap();

    assert!(config.global.dry);
    assert_eq!(config.discovery.backend, Backend::Find);
    assert!(config.walk_options().follow_links());
    assert_eq!(config.lib.pattern, "*.h");

    let table = config.lib_table().unwrap();
    let extra = &table.mappings()[29];
    assert_eq!(extra.new_name(), "conf.h");
    assert_eq!(extra.styles(), IncludeStyle::QUOTED);
    assert!(table.chain_hazards().is_empty());
}

#[test]
fn config_parse_rejects_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

#[test]
fn config_parse_rejects_bad_backend() {
    assert!(Config::parse("[discovery]\nbackend = \"rg\"\n").is_err());
}

#[test]
fn config_parse_rejects_bad_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn config_parse_rejects_quoted_header() {
    let toml = r#"
[[lib.mappings]]
from = "x.h\""
to = "y.h"
"#;
    let err = Config::parse(toml).unwrap_err();
    assert!(format!("{err:#}").contains("not a valid header name"));
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_layered_files() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(&base, "[lib]\npattern = \"*.h\"\nroots = [\"lib\"]\n").unwrap();
    std::fs::write(&local, "[lib]\nroots = [\"vendor\"]\n").unwrap();

    let config = Config::builder()
        .add_toml_file(&base)
        .add_toml_file(&local)
        .build()
        .unwrap();

    assert_eq!(config.lib.pattern, "*.h");
    assert_eq!(config.lib.roots, vec![std::path::PathBuf::from("vendor")]);
}

#[test]
fn config_set_beats_files() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("incfix.toml");
    std::fs::write(&path, "[encoding]\non_invalid = \"replace\"\n").unwrap();

    let config = Config::builder()
        .add_toml_file(&path)
        .apply_overrides(&["encoding/on_invalid=ignore"])
        .unwrap()
        .build()
        .unwrap();

    insta::assert_snapshot!(config.rewrite_options().decode_policy(), @"ignore");
}
