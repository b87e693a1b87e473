// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;

#[test]
fn test_builder_collects_args_and_kwargs() {
    let call = LogCall::new().arg("disk full").arg(3).kwarg("path", "/tmp");

    assert_eq!(call.args, vec!["disk full".to_string(), "3".to_string()]);
    assert_eq!(call.kwargs.get("path").map(String::as_str), Some("/tmp"));
    assert_eq!(call.message(), Some("disk full"));
}

#[test]
fn test_message_absent_without_args() {
    assert_eq!(LogCall::new().kwarg("k", 1).message(), None);
}

#[test]
fn test_str_and_string_args() {
    assert_eq!("hello".to_log_call().args, vec!["hello".to_string()]);
    assert_eq!(String::from("hi").to_log_call().args, vec!["hi".to_string()]);
}

#[test]
fn test_format_arguments() {
    let call = format_args!("{} + {}", 1, 2).to_log_call();
    assert_eq!(call.message(), Some("1 + 2"));
}

#[test]
fn test_tuple_args_use_debug() {
    let call = (404u16, "not found").to_log_call();
    assert_eq!(call.args, vec!["404".to_string(), "\"not found\"".to_string()]);
    assert!(call.kwargs.is_empty());
}

#[test]
fn test_serialization_skips_empty_kwargs() {
    let json = serde_json::to_string(&LogCall::new().arg("x")).unwrap();
    assert_eq!(json, r#"{"args":["x"]}"#);

    let parsed: LogCall = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, LogCall::new().arg("x"));
}
