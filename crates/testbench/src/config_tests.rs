// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_defaults() {
    let config = TestbenchConfig::default();
    assert_eq!(config.assert.max_diff, 100);
    assert_eq!(config.assert.diff_context, 5);
    assert!(config.import.check_header);
    assert_eq!(config.import.script_suffix, ".rs");
    assert!(config.import.packages.extra.is_empty());
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = TestbenchConfig::from_toml_str("").unwrap();
    assert_eq!(config, TestbenchConfig::default());
}

#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[assert]
max_diff = 20
diff_context = 1

[import]
check_header = false
script_suffix = ".rsx"

[import.packages]
extra = ["tools"]
exclude = ["^vendor", "_test$"]

[import.scripts]
exclude = ["^bin/legacy"]
"#;
    let config = TestbenchConfig::from_toml_str(toml_str).unwrap();
    assert_eq!(config.assert.max_diff, 20);
    assert_eq!(config.assert.diff_context, 1);
    assert!(!config.import.check_header);
    assert_eq!(config.import.script_suffix, ".rsx");
    assert_eq!(config.import.packages.extra, vec!["tools".to_string()]);
    assert_eq!(config.import.packages.exclude.len(), 2);
    assert_eq!(config.import.scripts.exclude, vec!["^bin/legacy".to_string()]);
    assert!(config.import.modules.exclude.is_empty());
}

#[test]
fn test_partial_assert_section() {
    let config = TestbenchConfig::from_toml_str("[assert]\nmax_diff = 3\n").unwrap();
    assert_eq!(config.assert.max_diff, 3);
    assert_eq!(config.assert.diff_context, DEFAULT_DIFF_CONTEXT);
}

#[test]
fn test_unknown_field_rejected() {
    let result = TestbenchConfig::from_toml_str("[assert]\nmax_lines = 3\n");
    assert!(matches!(result, Err(Error::Toml(_))));
}

#[test]
fn test_invalid_exclude_pattern_rejected() {
    let result = TestbenchConfig::from_toml_str("[import.modules]\nexclude = [\"(unclosed\"]\n");
    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("import.modules.exclude"), "{}", msg),
        other => panic!("Expected config error, got {:?}", other),
    }
}

#[test]
fn test_empty_script_suffix_rejected() {
    let result = TestbenchConfig::from_toml_str("[import]\nscript_suffix = \"\"\n");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("testbench.toml");
    std::fs::write(&path, "[import]\ncheck_header = false\n").unwrap();

    let config = TestbenchConfig::load(&path).unwrap();
    assert!(!config.import.check_header);
}

#[test]
fn test_load_missing_file() {
    let result = TestbenchConfig::load(Path::new("/nonexistent/testbench.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_overrides() {
    let config = AssertConfig::default().with_overrides(Some(10), None);
    assert_eq!(config.max_diff, 10);
    assert_eq!(config.diff_context, DEFAULT_DIFF_CONTEXT);

    let config = AssertConfig::default().with_overrides(None, Some(0));
    assert_eq!(config.max_diff, DEFAULT_MAX_DIFF);
    assert_eq!(config.diff_context, 0);
}

#[test]
fn test_selection_builders() {
    let selection = Selection::default()
        .with_extra(["a", "b"])
        .with_exclude(vec![String::from("^x")]);
    assert_eq!(selection.extra, vec!["a".to_string(), "b".to_string()]);
    assert!(selection.exclude_set().unwrap().is_match("xyz"));
}

#[test]
fn test_config_round_trips_through_toml() {
    let mut config = TestbenchConfig::default();
    config.import.modules = Selection::default().with_exclude(["^internal"]);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(TestbenchConfig::from_toml_str(&text).unwrap(), config);
}
