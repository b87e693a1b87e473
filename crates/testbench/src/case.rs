// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Enhanced test case.
//!
//! A [`TestCase`] is created at the start of a test and dropped at its end.
//! Creation is setup: fresh log cache, uncaptured streams. Dropping is
//! teardown: both streams are restored to their original sinks and the log
//! cache is cleared, whether the test passed, failed or panicked.
//!
//! ```
//! use std::io::Write;
//! use testbench::TestCase;
//!
//! let case = TestCase::new();
//! case.mock_stdout(true).unwrap();
//! writeln!(case.stdout(), "hello").unwrap();
//! assert!(case.get_stdout().contains("hello"));
//! ```

use crate::assertions::{self, IntoPattern, Invocation};
use crate::config::AssertConfig;
use crate::error::{self, Error};
use std::fmt::Debug;
use std::io;
use testbench_capture::{Capture, LogArgs, LogRecorder, RecordingLayer, Stream};
use tracing_subscriber::layer::SubscriberExt;

/// Test case with diff-friendly assertions, output capture and a log cache
#[derive(Debug)]
pub struct TestCase {
    config: AssertConfig,
    stdout: Stream,
    stderr: Stream,
    logcache: LogRecorder,
}

impl TestCase {
    /// Set up a case writing to the process stdout/stderr, with
    /// [`AssertConfig::from_env`] settings
    pub fn new() -> Self {
        Self::with_config(AssertConfig::from_env())
    }

    pub fn with_config(config: AssertConfig) -> Self {
        Self::with_streams(config, Stream::stdout(), Stream::stderr())
    }

    /// Set up a case whose streams forward to the given handles
    pub fn with_streams(config: AssertConfig, stdout: Stream, stderr: Stream) -> Self {
        let case = Self {
            config,
            stdout,
            stderr,
            logcache: LogRecorder::new(),
        };
        case.reset_logcache(None);
        case
    }

    pub fn config(&self) -> &AssertConfig {
        &self.config
    }

    // Equality

    /// Assert `left == right`, failing with a diff of the two values
    pub fn assert_equal<T>(&self, left: &T, right: &T)
    where
        T: PartialEq + Debug + ?Sized,
    {
        if let Err(failure) = assertions::check_equal(left, right, None, &self.config) {
            error::fail(failure);
        }
    }

    /// [`TestCase::assert_equal`] with a message prefixed to the failure
    pub fn assert_equal_msg<T>(&self, left: &T, right: &T, msg: &str)
    where
        T: PartialEq + Debug + ?Sized,
    {
        if let Err(failure) = assertions::check_equal(left, right, Some(msg), &self.config) {
            error::fail(failure);
        }
    }

    // Errors

    /// Assert that `invocation` fails with an error of kind `K` whose
    /// message matches `pattern`.
    ///
    /// Panics when the call succeeds or the message does not match. An
    /// error of another kind is returned as-is for the test to propagate.
    ///
    /// ```
    /// use std::num::ParseIntError;
    /// use testbench::{call, TestCase};
    ///
    /// fn parse_port(s: &str) -> Result<u16, ParseIntError> {
    ///     s.parse()
    /// }
    ///
    /// let case = TestCase::new();
    /// case.assert_error_regex::<ParseIntError>("invalid digit", call!(parse_port, "80a"))
    ///     .unwrap();
    /// ```
    pub fn assert_error_regex<K>(
        &self,
        pattern: impl IntoPattern,
        invocation: Invocation<'_>,
    ) -> anyhow::Result<()>
    where
        K: std::error::Error + Send + Sync + 'static,
    {
        assertions::check_error_regex::<K>(pattern, invocation).map_err(error::raise)
    }

    // Streams

    /// Handle for code under test to write its standard output through
    pub fn stdout(&self) -> Stream {
        self.stdout.clone()
    }

    /// Handle for code under test to write its standard error through
    pub fn stderr(&self) -> Stream {
        self.stderr.clone()
    }

    /// Enable (fresh buffer) or disable (original sink) stdout capture
    pub fn mock_stdout(&self, enable: bool) -> io::Result<()> {
        self.stdout.set_capturing(enable)
    }

    /// Enable (fresh buffer) or disable (original sink) stderr capture
    pub fn mock_stderr(&self, enable: bool) -> io::Result<()> {
        self.stderr.set_capturing(enable)
    }

    /// Output captured from stdout since capture was enabled
    pub fn get_stdout(&self) -> String {
        self.stdout.captured()
    }

    /// Output captured from stderr since capture was enabled
    pub fn get_stderr(&self) -> String {
        self.stderr.captured()
    }

    /// Capture stdout until the returned guard is dropped
    pub fn capture_stdout(&self) -> io::Result<Capture> {
        self.stdout.capture()
    }

    /// Capture stderr until the returned guard is dropped
    pub fn capture_stderr(&self) -> io::Result<Capture> {
        self.stderr.capture()
    }

    // Log cache

    /// Wrap a log method so calls are counted under `name` and then
    /// forwarded unchanged. An empty name is rejected.
    pub fn mock_logmethod<A, F>(&self, name: &str, log_method: F) -> Result<impl Fn(A), Error>
    where
        A: LogArgs,
        F: Fn(A),
    {
        Ok(self.logcache.intercept(name, log_method)?)
    }

    /// Record `tracing` events from the current thread into the log cache,
    /// under their lower-case level names, until the guard is dropped
    pub fn intercept_tracing(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber =
            tracing_subscriber::registry().with(RecordingLayer::new(self.logcache.clone()));
        tracing::subscriber::set_default(subscriber)
    }

    /// Number of calls recorded for `name`
    pub fn count_logcache(&self, name: &str) -> usize {
        self.logcache.count(name)
    }

    /// Clear the records for `name`, or the whole cache
    pub fn reset_logcache(&self, name: Option<&str>) {
        self.logcache.reset(name);
    }

    pub fn logcache(&self) -> &LogRecorder {
        &self.logcache
    }

    /// Restore both streams and clear the log cache. Safe to call repeatedly;
    /// also runs on drop.
    pub fn tear_down(&mut self) {
        let _ = self.mock_stdout(false);
        let _ = self.mock_stderr(false);
        self.reset_logcache(None);
    }
}

impl Default for TestCase {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestCase {
    fn drop(&mut self) {
        self.tear_down();
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
