// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test log output.

use crate::env;
use tracing_subscriber::EnvFilter;

/// Default filter when `TESTBENCH_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Install a `fmt` subscriber writing through the test harness's captured
/// output. Filter directives come from `TESTBENCH_LOG`. Calling it again,
/// or after another subscriber was installed, does nothing.
pub fn init_logging() {
    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
