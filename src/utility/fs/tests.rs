// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::walk::{WalkOptions, find_files};
use crate::error::{DiscoveryError, IncfixError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_find_files_matches_c_and_h() {
    let temp = temp_dir();
    let lib = temp.path().join("lib");
    std::fs::create_dir_all(lib.join("sub")).unwrap();
    std::fs::write(lib.join("lapi.c"), "").unwrap();
    std::fs::write(lib.join("lapi.h"), "").unwrap();
    std::fs::write(lib.join("notes.txt"), "").unwrap();
    std::fs::write(lib.join("sub/lgc.h"), "").unwrap();
    std::fs::write(lib.join("sub/lgc.cpp"), "").unwrap();

    let files = find_files(&[&lib], "*.[ch]", &WalkOptions::default()).unwrap();

    insta::assert_snapshot!(names(&lib, &files).join("\n"), @r"
    lapi.c
    lapi.h
    sub/lgc.h
    ");
}

#[test]
fn test_find_files_roots_in_order() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    let lib = temp.path().join("lib");
    std::fs::create_dir(&src).unwrap();
    std::fs::create_dir(&lib).unwrap();
    std::fs::write(src.join("z.c"), "").unwrap();
    std::fs::write(lib.join("a.c"), "").unwrap();

    let files = find_files(&[&src, &lib], "*.c", &WalkOptions::default()).unwrap();

    assert_eq!(files, vec![src.join("z.c"), lib.join("a.c")]);
}

#[test]
fn test_find_files_includes_hidden_by_default() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join(".cache")).unwrap();
    std::fs::write(temp.path().join(".cache/gen.h"), "").unwrap();
    std::fs::write(temp.path().join(".gitignore"), "*.h\n").unwrap();

    let files = find_files(&[temp.path()], "*.h", &WalkOptions::default()).unwrap();
    assert_eq!(files.len(), 1);

    let filtered = WalkOptions::builder()
        .with_include_hidden(false)
        .build();
    let files = find_files(&[temp.path()], "*.h", &filtered).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_find_files_skip_dirs() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join("build")).unwrap();
    std::fs::write(temp.path().join("build/out.h"), "").unwrap();
    std::fs::write(temp.path().join("keep.h"), "").unwrap();

    let options = WalkOptions::builder()
        .with_skip_dirs(vec!["build".to_string()])
        .build();
    let files = find_files(&[temp.path()], "*.h", &options).unwrap();

    assert_eq!(names(temp.path(), &files), vec!["keep.h"]);
}

#[cfg(unix)]
#[test]
fn test_find_files_lists_file_symlinks() {
    let temp = temp_dir();
    let lib = temp.path().join("lib");
    std::fs::create_dir(&lib).unwrap();
    std::fs::write(temp.path().join("real.c"), "").unwrap();
    std::fs::write(lib.join("plain.c"), "").unwrap();
    std::os::unix::fs::symlink(temp.path().join("real.c"), lib.join("link.c")).unwrap();
    std::os::unix::fs::symlink(temp.path().join("gone.c"), lib.join("dangling.c")).unwrap();

    let files = find_files(&[&lib], "*.c", &WalkOptions::default()).unwrap();

    assert_eq!(names(&lib, &files), vec!["link.c", "plain.c"]);
}

#[test]
fn test_find_files_empty_result_is_ok() {
    let temp = temp_dir();
    std::fs::write(temp.path().join("README"), "").unwrap();

    let files = find_files(&[temp.path()], "*.[ch]", &WalkOptions::default()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_find_files_missing_root() {
    let temp = temp_dir();
    let missing = temp.path().join("nope");

    let err = find_files(&[&missing], "*.c", &WalkOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        IncfixError::Discovery(ref inner) if matches!(**inner, DiscoveryError::RootNotFound { .. })
    ));
}

#[test]
fn test_find_files_invalid_pattern() {
    let temp = temp_dir();

    let err = find_files(&[temp.path()], "*.[", &WalkOptions::default()).unwrap_err();
    assert!(err.to_string().contains("invalid file pattern"));
}
