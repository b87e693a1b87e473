// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log call and output stream recording for test assertions.
//!
//! This crate provides the recorders behind `testbench` test cases: a log
//! cache keyed by log method name, redirectable stdout/stderr handles with
//! in-memory capture, and a `tracing` layer feeding the log cache.

mod call;
mod layer;
mod log;
mod stream;

pub use call::{LogArgs, LogCall};
pub use layer::RecordingLayer;
pub use log::{LogRecorder, UnnamedLogMethod};
pub use stream::{Capture, Stream};
