// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for lock book and flag inspection

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::Host;
use predicates::prelude::*;

#[test]
fn test_request_is_idempotent() {
    let host = Host::new();
    host.as_member("unit-0")
        .args(["request", "restart"])
        .assert()
        .success();

    host.as_member("unit-0")
        .args(["request", "restart"])
        .assert()
        .success()
        .stdout("Already requested: restart\n");
}

#[test]
fn test_release_unknown_lock() {
    let host = Host::new();

    host.as_member("unit-0")
        .args(["release", "restart"])
        .assert()
        .success()
        .stdout("Not held or requested: restart\n");
}

#[test]
fn test_locks_shows_book() {
    let host = Host::new();
    host.as_member("unit-0")
        .args(["request", "db.migrate"])
        .assert()
        .success();

    host.coordctl()
        .arg("locks")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"requests\""))
        .stdout(predicate::str::contains("\"db.migrate\""));
}

#[test]
fn test_flags_lists_and_filters() {
    let host = Host::new();
    host.seed_flags(&["coordinator.granted.restart", "db.ready"]);

    host.coordctl()
        .arg("flags")
        .assert()
        .success()
        .stdout("coordinator.granted.restart\ndb.ready\n");

    host.coordctl()
        .args(["flags", "--prefix", "db."])
        .assert()
        .success()
        .stdout("db.ready\n");
}

#[test]
fn test_request_rejects_empty_lock_name() {
    let host = Host::new();

    host.as_member("unit-0")
        .args(["request", ""])
        .assert()
        .failure();

    assert!(!host.state_dir().join("coordinator.json").exists());
}
