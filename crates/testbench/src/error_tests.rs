// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]
use super::*;

#[test]
fn test_failure_display_is_message() {
    let failure = Failure::new("values differ");
    assert_eq!(failure.to_string(), "values differ");
    assert_eq!(failure.message(), "values differ");
}

#[test]
fn test_failure_classification() {
    let err: Error = Failure::new("nope").into();
    assert!(err.is_failure());
    assert_eq!(err.failure_message(), Some("nope"));

    let err = Error::Config("bad".to_string());
    assert!(!err.is_failure());
    assert_eq!(err.failure_message(), None);
}

#[test]
fn test_raise_returns_unexpected_unchanged() {
    let original = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let raised = raise(Error::Unexpected(original.into()));

    let io = raised.downcast_ref::<std::io::Error>().unwrap();
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_raise_wraps_other_errors() {
    let raised = raise(Error::Config("bad".to_string()));
    assert!(matches!(raised.downcast_ref::<Error>(), Some(Error::Config(_))));
}

#[test]
#[should_panic(expected = "values differ")]
fn test_raise_panics_on_failure() {
    let _ = raise(Failure::new("values differ").into());
}

#[test]
fn test_unnamed_log_method_converts() {
    let err: Error = testbench_capture::UnnamedLogMethod.into();
    assert!(err.to_string().contains("non-empty name"));
}
