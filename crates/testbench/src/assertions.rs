// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion checks behind [`crate::TestCase`].
//!
//! Every check returns `Result<(), Error>`: `Error::Failure` for a failed
//! expectation, any other variant for a problem the test did not expect.

use crate::config::AssertConfig;
use crate::diff::{self, Diff};
use crate::error::{Error, Failure};
use regex::Regex;
use std::fmt::{self, Debug};

/// Compare two values; on mismatch, fail with a diff of their text forms.
pub fn check_equal<T>(left: &T, right: &T, msg: Option<&str>, config: &AssertConfig) -> Result<(), Failure>
where
    T: PartialEq + Debug + ?Sized,
{
    if left == right {
        return Ok(());
    }

    let summary = diff::summary(left, right);
    let msg = match msg {
        Some(msg) => format!("{}: {}", msg, summary),
        None => summary,
    };

    let diff = Diff::new(&diff::text_form(left), &diff::text_form(right), config.diff_context);
    if diff.is_empty() {
        return Err(Failure::new(format!(
            "{}:\nDIFF: values are unequal but render identically",
            msg
        )));
    }
    Err(Failure::new(format!("{}:\n{}", msg, diff.report(config.max_diff))))
}

/// Description of a callable and the arguments it was invoked with
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Call {
    name: String,
    args: Vec<String>,
    kwargs: Vec<(String, String)>,
}

impl Call {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a positional argument, recorded with its `Debug` form
    pub fn arg(mut self, value: &impl Debug) -> Self {
        self.args.push(format!("{:?}", value));
        self
    }

    /// Append a named argument, recorded with its `Debug` form
    pub fn kwarg(mut self, key: impl Into<String>, value: &impl Debug) -> Self {
        self.kwargs.push((key.into(), format!("{:?}", value)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self
            .args
            .iter()
            .cloned()
            .chain(self.kwargs.iter().map(|(k, v)| format!("{}={}", k, v)))
            .collect();
        write!(f, "{}({})", self.name, args.join(", "))
    }
}

type Run<'a> = Box<dyn FnOnce() -> Option<anyhow::Error> + 'a>;

/// A deferred call: what to run, and how to describe it in a failure.
///
/// Usually built with the [`call!`](crate::call) macro.
pub struct Invocation<'a> {
    call: Call,
    run: Run<'a>,
}

impl<'a> Invocation<'a> {
    pub fn new<T, E, F>(call: Call, f: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + 'a,
        E: Into<anyhow::Error>,
    {
        Self {
            call,
            run: Box::new(move || f().err().map(Into::into)),
        }
    }

    pub fn call(&self) -> &Call {
        &self.call
    }
}

impl Debug for Invocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("call", &self.call)
            .finish_non_exhaustive()
    }
}

/// Build an [`Invocation`] from a callable and its arguments.
///
/// `call!(parse_port, "80a")` describes itself as `parse_port("80a")` in
/// failure messages. Arguments are evaluated once for the description and
/// once for the call, so pass plain values.
#[macro_export]
macro_rules! call {
    ($func:expr $(, $arg:expr)* $(,)?) => {
        $crate::Invocation::new(
            $crate::Call::new(stringify!($func)) $(.arg(&$arg))*,
            move || ($func)($($arg),*),
        )
    };
}

/// Anything usable as the pattern of an error assertion
pub trait IntoPattern {
    fn into_pattern(self) -> Result<Regex, regex::Error>;
}

impl IntoPattern for &str {
    fn into_pattern(self) -> Result<Regex, regex::Error> {
        Regex::new(self)
    }
}

impl IntoPattern for String {
    fn into_pattern(self) -> Result<Regex, regex::Error> {
        Regex::new(&self)
    }
}

impl IntoPattern for Regex {
    fn into_pattern(self) -> Result<Regex, regex::Error> {
        Ok(self)
    }
}

impl IntoPattern for &Regex {
    fn into_pattern(self) -> Result<Regex, regex::Error> {
        Ok(self.clone())
    }
}

/// Human-readable message of an error value.
///
/// `Display` is the message; an error whose `Display` is empty is described
/// by its `Debug` form instead.
pub fn error_message(err: &(dyn std::error::Error + 'static)) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        format!("{:?}", err)
    } else {
        message
    }
}

/// Run `invocation`, expecting an error of kind `K` whose message matches
/// `pattern`.
///
/// An error of any other kind is returned unchanged as `Error::Unexpected`.
pub fn check_error_regex<K>(pattern: impl IntoPattern, invocation: Invocation<'_>) -> Result<(), Error>
where
    K: std::error::Error + Send + Sync + 'static,
{
    let regex = pattern.into_pattern()?;
    let Invocation { call, run } = invocation;

    let Some(err) = run() else {
        return Err(Failure::new(format!(
            "Expected errors with {} call should occur",
            call
        ))
        .into());
    };

    let message = match err.downcast_ref::<K>() {
        Some(expected) => error_message(expected),
        None => return Err(Error::Unexpected(err)),
    };

    if regex.is_match(&message) {
        Ok(())
    } else {
        Err(Failure::new(format!(
            "Pattern '{}' not found in '{}' (raised by {})",
            regex.as_str(),
            message,
            call
        ))
        .into())
    }
}

#[cfg(test)]
#[path = "assertions_tests.rs"]
mod tests;
