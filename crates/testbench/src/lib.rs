// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case helpers
//!
//! A thin layer over the standard test harness:
//!
//! - [`TestCase`]: equality assertions that fail with a readable diff,
//!   regex-matched error assertions, stdout/stderr capture and a log cache
//!   counting intercepted log calls.
//! - [`ImportTest`]: a smoke test loading every discoverable package,
//!   module and script, optionally checking file headers.
//!
#![doc = include_str!("../README.md")]

mod assertions;
mod case;
pub mod config;
mod diff;
pub mod env;
mod error;
mod import;
mod logging;

pub use assertions::{check_equal, check_error_regex, error_message, Call, IntoPattern, Invocation};
pub use case::TestCase;
pub use config::{AssertConfig, ImportConfig, Selection, TestbenchConfig};
pub use diff::{summary, text_form, Diff};
pub use error::{Error, Failure};
pub use import::{
    BoxError, Catalog, Discovery, HeaderCheck, ImportTest, LoadError, Loader, ModuleRegistry,
};
pub use logging::init_logging;

/// Re-exported recorder types from the testbench-capture crate.
pub mod capture {
    pub use testbench_capture::{Capture, LogArgs, LogCall, LogRecorder, RecordingLayer, Stream};
}
