// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use coord_core::{FakeFlagBus, FakeIdentity, FlagCall};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn new() -> Self {
        Self::default()
    }

    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a closure with captured tracing output
fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::new();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}

#[test]
fn traced_bus_delegates_calls() {
    let fake = FakeFlagBus::new();
    let traced = TracedFlagBus::new(fake.clone());

    traced.set_flag("coordinator.granted.db").unwrap();
    assert!(traced.is_set("coordinator.granted.db").unwrap());
    traced.clear_flag("coordinator.granted.db").unwrap();

    assert_eq!(
        fake.calls(),
        vec![
            FlagCall::Set {
                flag: "coordinator.granted.db".to_string()
            },
            FlagCall::IsSet {
                flag: "coordinator.granted.db".to_string()
            },
            FlagCall::Clear {
                flag: "coordinator.granted.db".to_string()
            },
        ]
    );
}

#[test]
fn traced_bus_prefix_listing_reaches_inner_prefix_listing() {
    let fake = FakeFlagBus::with_flags(["coordinator.requested.db", "other"]);
    let traced = TracedFlagBus::new(fake.clone());

    let flags = traced.list_prefixed("coordinator.requested.").unwrap();

    assert_eq!(flags.len(), 1);
    assert!(matches!(
        fake.calls().as_slice(),
        [FlagCall::ListPrefixed { prefix }] if prefix == "coordinator.requested."
    ));
}

#[test]
fn traced_bus_set_logs_span_and_outcome() {
    let (logs, result) = with_tracing(|| {
        TracedFlagBus::new(FakeFlagBus::new()).set_flag("coordinator.granted.db")
    });

    assert!(result.is_ok());
    assert!(logs.contains("flags.set"), "Should log span name. Logs:\n{}", logs);
    assert!(logs.contains("coordinator.granted.db"), "Logs:\n{}", logs);
    assert!(logs.contains("flag set"), "Logs:\n{}", logs);
}

#[test]
fn traced_bus_logs_write_failures() {
    let (logs, result) = with_tracing(|| {
        let fake = FakeFlagBus::new();
        fake.fail_writes_after(0);
        TracedFlagBus::new(fake).clear_flag("coordinator.requested.db")
    });

    assert!(result.is_err());
    assert!(logs.contains("clear failed"), "Logs:\n{}", logs);
    assert!(logs.contains("injected failure"), "Logs:\n{}", logs);
}

#[test]
fn traced_identity_logs_unknown_member() {
    let (logs, result) = with_tracing(|| TracedIdentity::new(FakeIdentity::unknown()).local_member());

    assert!(result.is_err());
    assert!(logs.contains("local member unknown"), "Logs:\n{}", logs);
}
