// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use yare::parameterized;

#[parameterized(
    plain = { "42", Some(42) },
    padded = { " 7 ", Some(7) },
    zero = { "0", Some(0) },
    negative = { "-1", None },
    garbage = { "lots", None },
    empty = { "", None },
)]
fn parse_usize_values(value: &str, expected: Option<usize>) {
    assert_eq!(parse_usize(value), expected);
}

#[test]
#[serial]
fn max_diff_returns_none_when_unset() {
    std::env::remove_var(TESTBENCH_MAX_DIFF);
    assert_eq!(max_diff(), None);
}

#[test]
#[serial]
fn max_diff_returns_value_when_set() {
    std::env::set_var(TESTBENCH_MAX_DIFF, "250");
    let result = max_diff();
    std::env::remove_var(TESTBENCH_MAX_DIFF);
    assert_eq!(result, Some(250));
}

#[test]
#[serial]
fn diff_context_returns_value_when_set() {
    std::env::set_var(TESTBENCH_DIFF_CONTEXT, "2");
    let result = diff_context();
    std::env::remove_var(TESTBENCH_DIFF_CONTEXT);
    assert_eq!(result, Some(2));
}

#[test]
#[serial]
fn log_filter_ignores_blank_value() {
    std::env::set_var(TESTBENCH_LOG, "  ");
    let result = log_filter();
    std::env::remove_var(TESTBENCH_LOG);
    assert_eq!(result, None);
}

#[test]
#[serial]
fn log_filter_returns_directives() {
    std::env::set_var(TESTBENCH_LOG, "testbench=debug");
    let result = log_filter();
    std::env::remove_var(TESTBENCH_LOG);
    assert_eq!(result.as_deref(), Some("testbench=debug"));
}
