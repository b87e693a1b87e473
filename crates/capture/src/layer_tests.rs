// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tracing_subscriber::layer::SubscriberExt;

fn with_recording<F: FnOnce()>(recorder: &LogRecorder, f: F) {
    let subscriber =
        tracing_subscriber::registry().with(RecordingLayer::new(recorder.clone()));
    tracing::subscriber::with_default(subscriber, f);
}

#[test]
fn test_events_filed_by_level() {
    let recorder = LogRecorder::new();

    with_recording(&recorder, || {
        tracing::error!("boom");
        tracing::error!("bang");
        tracing::warn!("careful");
        tracing::info!("fyi");
    });

    assert_eq!(recorder.count("error"), 2);
    assert_eq!(recorder.count("warn"), 1);
    assert_eq!(recorder.count("info"), 1);
    assert_eq!(recorder.count("debug"), 0);
}

#[test]
fn test_message_and_fields() {
    let recorder = LogRecorder::new();

    with_recording(&recorder, || {
        tracing::warn!(attempt = 3, path = "/tmp/x", "retrying {}", "upload");
    });

    let calls = recorder.calls("warn");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].message(), Some("retrying upload"));
    assert_eq!(calls[0].kwargs.get("attempt").map(String::as_str), Some("3"));
    assert_eq!(calls[0].kwargs.get("path").map(String::as_str), Some("/tmp/x"));
}

#[test]
fn test_event_without_message() {
    let recorder = LogRecorder::new();

    with_recording(&recorder, || {
        tracing::error!(code = 7);
    });

    let calls = recorder.calls("error");
    assert_eq!(calls[0].message(), None);
    assert_eq!(calls[0].kwargs.get("code").map(String::as_str), Some("7"));
}
