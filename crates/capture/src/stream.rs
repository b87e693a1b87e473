// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Redirectable output streams with in-memory capture.
//!
//! A [`Stream`] is the handle code under test writes its output through.
//! Writes go to the original sink (the process stdout/stderr by default)
//! unless capture is enabled, in which case they land in a buffer the test
//! can read back. Exactly one of the two is the active target at any time.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

struct Target {
    original: Box<dyn Write + Send>,
    buffer: Option<Vec<u8>>,
}

impl Target {
    fn flush_active(&mut self) -> io::Result<()> {
        match self.buffer {
            Some(_) => Ok(()),
            None => self.original.flush(),
        }
    }
}

/// Output stream handle; clones share the same target.
#[derive(Clone)]
pub struct Stream {
    name: &'static str,
    target: Arc<Mutex<Target>>,
}

impl Stream {
    /// Stream forwarding to the process stdout
    pub fn stdout() -> Self {
        Self::named("stdout", io::stdout())
    }

    /// Stream forwarding to the process stderr
    pub fn stderr() -> Self {
        Self::named("stderr", io::stderr())
    }

    /// Stream forwarding to an arbitrary sink
    pub fn with_sink(sink: impl Write + Send + 'static) -> Self {
        Self::named("sink", sink)
    }

    fn named(name: &'static str, sink: impl Write + Send + 'static) -> Self {
        Self {
            name,
            target: Arc::new(Mutex::new(Target {
                original: Box::new(sink),
                buffer: None,
            })),
        }
    }

    /// Flush the active target, then swap in a fresh buffer (`true`) or
    /// restore the original sink (`false`).
    ///
    /// Disabling an already disabled stream only flushes.
    pub fn set_capturing(&self, enable: bool) -> io::Result<()> {
        let mut target = self.target.lock();
        target.flush_active()?;
        target.buffer = enable.then(Vec::new);
        Ok(())
    }

    /// Whether writes currently land in the capture buffer
    pub fn is_capturing(&self) -> bool {
        self.target.lock().buffer.is_some()
    }

    /// Output captured since capture was enabled; empty when not capturing
    pub fn captured(&self) -> String {
        self.target
            .lock()
            .buffer
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }

    /// Capture output until the returned guard is dropped.
    ///
    /// The previous state (original sink, or an enclosing capture buffer) is
    /// put back on drop, on every exit path.
    pub fn capture(&self) -> io::Result<Capture> {
        let previous = {
            let mut target = self.target.lock();
            target.flush_active()?;
            target.buffer.replace(Vec::new())
        };
        Ok(Capture {
            stream: self.clone(),
            previous,
        })
    }
}

impl Write for Stream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.target.lock();
        let target = &mut *guard;
        match target.buffer {
            Some(ref mut buffer) => {
                buffer.extend_from_slice(buf);
                Ok(buf.len())
            }
            None => target.original.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.target.lock().flush_active()
    }
}

impl std::fmt::Debug for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("name", &self.name)
            .field("capturing", &self.is_capturing())
            .finish()
    }
}

/// Scoped capture of a [`Stream`]; see [`Stream::capture`].
#[must_use = "output is only captured while the guard is alive"]
pub struct Capture {
    stream: Stream,
    previous: Option<Vec<u8>>,
}

impl Capture {
    /// Output captured by this guard so far
    pub fn contents(&self) -> String {
        self.stream.captured()
    }

    /// The stream being captured, for handing to code under test
    pub fn stream(&self) -> Stream {
        self.stream.clone()
    }
}

impl Drop for Capture {
    fn drop(&mut self) {
        self.stream.target.lock().buffer = self.previous.take();
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
