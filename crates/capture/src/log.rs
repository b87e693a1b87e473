// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log cache implementation.

use crate::call::{LogArgs, LogCall};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Returned when a log method is intercepted without a name to file it under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Unknown log method: an intercepted log method needs a non-empty name")]
pub struct UnnamedLogMethod;

/// One JSONL line of a file-backed recorder
#[derive(Serialize)]
struct RecordLine<'a> {
    name: &'a str,
    #[serde(flatten)]
    call: &'a LogCall,
}

/// Log cache: intercepted log method calls keyed by method name.
///
/// Clones share the same cache, so a wrapper handed to the code under test
/// and the test case asserting on it see the same records.
pub struct LogRecorder {
    calls: Arc<Mutex<BTreeMap<String, Vec<LogCall>>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl LogRecorder {
    /// Create a new in-memory recorder
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(BTreeMap::new())),
            file_writer: None,
        }
    }

    /// Create a recorder that also appends every call to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            calls: Arc::new(Mutex::new(BTreeMap::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record a call under `name`
    pub fn record(&self, name: &str, call: LogCall) {
        // Write to file if configured
        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            let line = RecordLine { name, call: &call };
            if let Ok(json) = serde_json::to_string(&line) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }

        self.calls
            .lock()
            .entry(name.to_string())
            .or_default()
            .push(call);
    }

    /// Wrap a log method so every call is recorded under `name` and then
    /// forwarded unchanged.
    pub fn intercept<A, F>(
        &self,
        name: &str,
        log_method: F,
    ) -> Result<impl Fn(A), UnnamedLogMethod>
    where
        A: LogArgs,
        F: Fn(A),
    {
        if name.trim().is_empty() {
            return Err(UnnamedLogMethod);
        }
        let name = name.to_string();
        let recorder = self.clone();
        Ok(move |args: A| {
            recorder.record(&name, args.to_log_call());
            log_method(args);
        })
    }

    /// Number of calls recorded under `name` (0 when none)
    pub fn count(&self, name: &str) -> usize {
        self.calls.lock().get(name).map_or(0, Vec::len)
    }

    /// Calls recorded under `name`, oldest first
    pub fn calls(&self, name: &str) -> Vec<LogCall> {
        self.calls.lock().get(name).cloned().unwrap_or_default()
    }

    /// Names with at least one recorded call
    pub fn names(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|(_, calls)| !calls.is_empty())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Clear the calls for one name, or the whole cache when `name` is `None`
    pub fn reset(&self, name: Option<&str>) {
        let mut calls = self.calls.lock();
        match name {
            Some(name) => {
                calls.remove(name);
            }
            None => calls.clear(),
        }
    }

    /// Total number of recorded calls across all names
    pub fn len(&self) -> usize {
        self.calls.lock().values().map(Vec::len).sum()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LogRecorder {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

impl std::fmt::Debug for LogRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogRecorder")
            .field("calls", &*self.calls.lock())
            .field("file_backed", &self.file_writer.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
