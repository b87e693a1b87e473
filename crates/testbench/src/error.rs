// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types shared by the assertion helpers and the import smoke test.

use testbench_capture::UnnamedLogMethod;
use thiserror::Error;

/// Errors produced by the `check_*` layer.
///
/// Only [`Error::Failure`] is an expectation mismatch. Everything else is a
/// problem with the test itself or with the code under test and must reach
/// the harness unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Failure(#[from] Failure),

    /// An error of a kind the test did not anticipate
    #[error(transparent)]
    Unexpected(anyhow::Error),

    #[error("Invalid regex pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    UnnamedLogMethod(#[from] UnnamedLogMethod),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether this is an expectation mismatch rather than an error
    pub fn is_failure(&self) -> bool {
        matches!(self, Error::Failure(_))
    }

    /// The failure message, if this is an expectation mismatch
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Error::Failure(failure) => Some(failure.message()),
            _ => None,
        }
    }
}

/// A failed expectation, reported by the harness as a failed test
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Report a failed expectation to the test harness.
#[allow(clippy::panic)]
pub(crate) fn fail(failure: Failure) -> ! {
    panic!("{}", failure)
}

/// Split an error into the harness's two channels: failures panic, anything
/// else is handed back for the test to propagate with `?`.
pub(crate) fn raise(err: Error) -> anyhow::Error {
    match err {
        Error::Failure(failure) => fail(failure),
        Error::Unexpected(err) => err,
        other => other.into(),
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
