// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tracing` bridge into the log cache.

use crate::call::LogCall;
use crate::log::LogRecorder;
use std::collections::BTreeMap;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Layer recording every `tracing` event into a [`LogRecorder`].
///
/// Events are filed under their lower-case level name (`"error"`, `"warn"`,
/// `"info"`, `"debug"`, `"trace"`). The `message` field becomes the first
/// positional argument; every other field becomes a named argument.
#[derive(Clone, Debug)]
pub struct RecordingLayer {
    recorder: LogRecorder,
}

impl RecordingLayer {
    pub fn new(recorder: LogRecorder) -> Self {
        Self { recorder }
    }
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = CallVisitor::default();
        event.record(&mut visitor);
        let name = event.metadata().level().to_string().to_ascii_lowercase();
        self.recorder.record(&name, visitor.finish());
    }
}

#[derive(Default)]
struct CallVisitor {
    message: Option<String>,
    kwargs: BTreeMap<String, String>,
}

impl CallVisitor {
    fn finish(self) -> LogCall {
        LogCall {
            args: self.message.into_iter().collect(),
            kwargs: self.kwargs,
        }
    }

    fn store(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.kwargs.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for CallVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field, format!("{:?}", value));
    }
}

#[cfg(test)]
#[path = "layer_tests.rs"]
mod tests;
