// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{FileOutcome, RewriteOptions, apply_rules, rewrite_file};
use crate::error::{FsError, IncfixError};
use crate::rules::{IncludeMapping, IncludeStyle, RuleTable};
use crate::utility::encoding::{DecodePolicy, Encoding};
use std::borrow::Cow;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_limits_rewrites_only_the_include() {
    let source = "/* header */\n#include \"limits.h\"\nint x; // limits.h\n";
    let rewrite = apply_rules(source, RuleTable::limits().rules());

    assert!(rewrite.changed());
    insta::assert_snapshot!(rewrite.text(), @r#"
    /* header */
    #include "llimits.h"
    int x; // limits.h
    "#);
}

#[test]
fn test_limits_leaves_angle_include() {
    let source = "#include <limits.h>\n";
    let rewrite = apply_rules(source, RuleTable::limits().rules());

    assert!(!rewrite.changed());
    assert!(matches!(rewrite.into_text(), Cow::Borrowed(_)));
}

#[test]
fn test_limits_ignores_bare_mention() {
    let source = "/* see limits.h and \"limits.h\" */\n#include\t\"limits.h\"\n";
    let rewrite = apply_rules(source, RuleTable::limits().rules());

    assert!(!rewrite.changed());
    assert_eq!(rewrite.text(), source);
}

#[test]
fn test_lib_preserves_angle_brackets() {
    let rewrite = apply_rules("#include <lauxlib.h>\n", RuleTable::lib().rules());
    assert_eq!(rewrite.text(), "#include <auxlib.h>\n");
}

#[test]
fn test_lib_rewrites_several_includes_in_one_pass() {
    let source = "#include \"lapi.h\"\n#include \"lgc.h\"\n#include \"lapi.h\"\n";
    let rewrite = apply_rules(source, RuleTable::lib().rules());

    insta::assert_snapshot!(rewrite.text(), @r#"
    #include "api.h"
    #include "gc.h"
    #include "api.h"
    "#);
}

#[test]
fn test_lib_is_idempotent() {
    let source = "#include \"llimits.h\"\n#include <lstring.h>\n#include \"lzio.h\"\n";
    let rules = RuleTable::lib();

    let first = apply_rules(source, rules.rules());
    assert!(first.changed());

    let second = apply_rules(first.text(), rules.rules());
    assert!(!second.changed());
}

#[test]
fn test_chained_rules_apply_in_declaration_order() {
    let table = RuleTable::new(
        "custom",
        "includes",
        vec![
            IncludeMapping::new("a.h", "b.h", IncludeStyle::QUOTED),
            IncludeMapping::new("b.h", "c.h", IncludeStyle::QUOTED),
        ],
    )
    .unwrap();

    let rewrite = apply_rules("#include \"a.h\"\n", table.rules());
    assert_eq!(rewrite.text(), "#include \"c.h\"\n");
}

#[test]
fn test_rewrite_file_updates_changed_file() {
    let temp = temp_dir();
    let path = temp.path().join("lapi.c");
    std::fs::write(&path, "#include \"lapi.h\"\nint main(void) { return 0; }\n").unwrap();

    let outcome = rewrite_file(&path, RuleTable::lib().rules(), &RewriteOptions::default()).unwrap();

    assert_eq!(outcome, FileOutcome::Updated);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "#include \"api.h\"\nint main(void) { return 0; }\n"
    );
}

#[test]
fn test_rewrite_file_leaves_unchanged_file_alone() {
    let temp = temp_dir();
    let path = temp.path().join("plain.c");
    std::fs::write(&path, "#include <stdio.h>\n").unwrap();
    let before = std::fs::metadata(&path).unwrap().modified().unwrap();

    let outcome = rewrite_file(&path, RuleTable::lib().rules(), &RewriteOptions::default()).unwrap();

    assert_eq!(outcome, FileOutcome::Unchanged);
    let after = std::fs::metadata(&path).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_rewrite_file_tolerates_invalid_utf8() {
    let temp = temp_dir();
    let path = temp.path().join("blob.h");
    std::fs::write(&path, b"\xff\xfe#include \"lgc.h\"\n\x80").unwrap();

    let outcome = rewrite_file(&path, RuleTable::lib().rules(), &RewriteOptions::default()).unwrap();

    assert_eq!(outcome, FileOutcome::Updated);
    assert_eq!(std::fs::read(&path).unwrap(), b"#include \"gc.h\"\n");
}

#[test]
fn test_rewrite_file_invalid_utf8_without_match_is_untouched() {
    let temp = temp_dir();
    let path = temp.path().join("blob.h");
    let bytes = b"\xff\xfe binary \x80";
    std::fs::write(&path, bytes).unwrap();

    let outcome = rewrite_file(&path, RuleTable::lib().rules(), &RewriteOptions::default()).unwrap();

    assert_eq!(outcome, FileOutcome::Unchanged);
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_rewrite_file_replace_policy_keeps_marker() {
    let temp = temp_dir();
    let path = temp.path().join("blob.h");
    std::fs::write(&path, b"\xff#include <lvm.h>").unwrap();

    let options = RewriteOptions::builder()
        .with_decode_policy(DecodePolicy::Replace)
        .build();
    rewrite_file(&path, RuleTable::lib().rules(), &options).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "\u{FFFD}#include <vm.h>"
    );
}

#[test]
fn test_rewrite_file_legacy_code_page_roundtrip() {
    let temp = temp_dir();
    let path = temp.path().join("lstate.c");
    std::fs::write(&path, b"/* caf\xe9 */\n#include \"lstate.h\"\n").unwrap();

    let options = RewriteOptions::builder()
        .with_encoding(Encoding::Acp)
        .build();
    rewrite_file(&path, RuleTable::lib().rules(), &options).unwrap();

    assert_eq!(
        std::fs::read(&path).unwrap(),
        b"/* caf\xe9 */\n#include \"state.h\"\n"
    );
}

#[test]
fn test_rewrite_file_dry_run_does_not_write() {
    let temp = temp_dir();
    let path = temp.path().join("lgc.c");
    let source = "#include \"lgc.h\"\n";
    std::fs::write(&path, source).unwrap();

    let options = RewriteOptions::builder().with_dry_run(true).build();
    let outcome = rewrite_file(&path, RuleTable::lib().rules(), &options).unwrap();

    assert_eq!(outcome, FileOutcome::Updated);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn test_rewrite_file_missing_file_is_read_error() {
    let temp = temp_dir();
    let path = temp.path().join("missing.c");

    let err = rewrite_file(&path, RuleTable::lib().rules(), &RewriteOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        IncfixError::Fs(ref inner) if matches!(**inner, FsError::ReadFailed { .. })
    ));
}
