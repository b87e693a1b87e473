// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use yare::parameterized;

fn catalog() -> Catalog {
    Catalog::new("/repo")
        .with_package("core", ["core/lib.rs", "core/util.rs"])
        .with_package("net", ["net/lib.rs"])
        .with_package("vendor_zlib", ["vendor/zlib.rs"])
        .with_module("settings")
        .with_module("settings_test")
        .with_script("bin/deploy.rs")
        .with_script("bin/README.md")
}

#[test]
fn test_packages_sorted() {
    let packages = catalog().packages(&Selection::default()).unwrap();
    assert_eq!(packages, vec!["core", "net", "vendor_zlib"]);
}

#[parameterized(
    prefix = { &["^vendor"], &["core", "net"] },
    suffix = { &["_zlib$"], &["core", "net"] },
    anywhere = { &["e"], &[] },
    several = { &["^core$", "^net$"], &["vendor_zlib"] },
)]
fn exclude_patterns(exclude: &[&str], expected: &[&str]) {
    let selection = Selection::default().with_exclude(exclude.iter().copied());
    assert_eq!(catalog().packages(&selection).unwrap(), expected);
}

#[test]
fn test_extra_entries_added_once() {
    let selection = Selection::default().with_extra(["core", "tools"]);
    let packages = catalog().packages(&selection).unwrap();
    assert_eq!(packages, vec!["core", "net", "tools", "vendor_zlib"]);
}

#[test]
fn test_exclude_applies_to_extras() {
    let selection = Selection::default()
        .with_extra(["tools_test"])
        .with_exclude(["_test$"]);
    let modules = catalog().modules(&selection).unwrap();
    assert_eq!(modules, vec!["settings"]);
}

#[test]
fn test_invalid_exclude_pattern() {
    let selection = Selection::default().with_exclude(["[unclosed"]);
    let result = catalog().scripts(&selection);
    assert!(matches!(result, Err(Error::Pattern(_))));
}

#[test]
fn test_files_in_package() {
    let files = catalog().files_in_package("core");
    assert_eq!(
        files,
        vec![PathBuf::from("core/lib.rs"), PathBuf::from("core/util.rs")]
    );
    assert!(catalog().files_in_package("missing").is_empty());
}

#[test]
fn test_base_dir() {
    assert_eq!(catalog().base_dir(), Path::new("/repo"));
}
