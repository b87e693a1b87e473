// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by testbench are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Cap on diff lines in equality failure messages.
pub const TESTBENCH_MAX_DIFF: &str = "TESTBENCH_MAX_DIFF";
/// Context lines around each change in equality failure diffs.
pub const TESTBENCH_DIFF_CONTEXT: &str = "TESTBENCH_DIFF_CONTEXT";
/// `EnvFilter` directives for [`crate::init_logging`].
pub const TESTBENCH_LOG: &str = "TESTBENCH_LOG";

/// `TESTBENCH_MAX_DIFF`
pub fn max_diff() -> Option<usize> {
    var_usize(TESTBENCH_MAX_DIFF)
}

/// `TESTBENCH_DIFF_CONTEXT`
pub fn diff_context() -> Option<usize> {
    var_usize(TESTBENCH_DIFF_CONTEXT)
}

/// `TESTBENCH_LOG`
pub fn log_filter() -> Option<String> {
    std::env::var(TESTBENCH_LOG).ok().filter(|v| !v.trim().is_empty())
}

fn var_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|v| parse_usize(&v))
}

fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
