// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded log call data types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One intercepted log method invocation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogCall {
    /// Positional arguments, formatted
    #[serde(default)]
    pub args: Vec<String>,

    /// Named arguments, formatted
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub kwargs: BTreeMap<String, String>,
}

impl LogCall {
    /// Create an empty call record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument
    pub fn arg(mut self, value: impl fmt::Display) -> Self {
        self.args.push(value.to_string());
        self
    }

    /// Set a named argument
    pub fn kwarg(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.kwargs.insert(key.into(), value.to_string());
        self
    }

    /// The first positional argument, conventionally the log message
    pub fn message(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Conversion of a log method's arguments into a recorded call.
///
/// Implemented for the argument shapes log functions usually take: a single
/// message (`&str`, `String`, `fmt::Arguments`), a prebuilt [`LogCall`], and
/// tuples of `Debug` values, one positional argument per element.
pub trait LogArgs {
    fn to_log_call(&self) -> LogCall;
}

impl LogArgs for &str {
    fn to_log_call(&self) -> LogCall {
        LogCall::new().arg(self)
    }
}

impl LogArgs for String {
    fn to_log_call(&self) -> LogCall {
        LogCall::new().arg(self)
    }
}

impl LogArgs for fmt::Arguments<'_> {
    fn to_log_call(&self) -> LogCall {
        LogCall::new().arg(self)
    }
}

impl LogArgs for LogCall {
    fn to_log_call(&self) -> LogCall {
        self.clone()
    }
}

macro_rules! tuple_log_args {
    ($($name:ident),+) => {
        impl<$($name: fmt::Debug),+> LogArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn to_log_call(&self) -> LogCall {
                let ($($name,)+) = self;
                LogCall {
                    args: vec![$(format!("{:?}", $name)),+],
                    kwargs: BTreeMap::new(),
                }
            }
        }
    };
}

tuple_log_args!(A);
tuple_log_args!(A, B);
tuple_log_args!(A, B, C);
tuple_log_args!(A, B, C, D);

#[cfg(test)]
#[path = "call_tests.rs"]
mod tests;
