// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for fatal start-up errors

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::Host;
use predicates::prelude::*;

#[test]
fn test_unknown_backend_is_fatal() {
    let host = Host::new();
    host.layer_options("[coordinator]\nclass = \"site.Quorum\"\n");
    host.seed_flags(&["coordinator.granted.stale"]);

    host.as_member("unit-0")
        .arg("hook")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unknown coordinator backend 'site.Quorum'",
        ))
        .stderr(predicate::str::contains("coordinator.SimpleCoordinator"));

    // No reconciliation ran
    assert_eq!(host.flags(), vec!["coordinator.granted.stale".to_string()]);
}

#[test]
fn test_non_coordinator_export_is_fatal() {
    let host = Host::new();
    host.layer_options("[coordinator]\nclass = \"LockBook\"\n");

    host.as_member("unit-0")
        .arg("hook")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'LockBook' is not a coordinator backend",
        ));
}

#[test]
fn test_unknown_member_suggests_override() {
    let host = Host::new();

    host.coordctl()
        .arg("hook")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Local member is unknown"))
        .stderr(predicate::str::contains("--member"));
}

#[test]
fn test_invalid_layer_options() {
    let host = Host::new();
    host.layer_options("[coordinator\n");

    host.as_member("unit-0")
        .arg("hook")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid layer options"))
        .stderr(predicate::str::contains("--config"));
}
