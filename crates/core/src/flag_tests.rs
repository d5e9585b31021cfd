// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    granted = { Namespace::Granted, "db", "coordinator.granted.db" },
    requested = { Namespace::Requested, "cache", "coordinator.requested.cache" },
    dotted = { Namespace::Granted, "restart.db", "coordinator.granted.restart.db" },
    empty = { Namespace::Requested, "", "coordinator.requested." },
)]
fn flag_names(ns: Namespace, lock: &str, expected: &str) {
    assert_eq!(ns.flag(lock), expected);
    assert_eq!(ns.lock_name(expected), Some(lock));
}

#[parameterized(
    other_namespace = { Namespace::Granted, "coordinator.requested.db" },
    unrelated = { Namespace::Granted, "db.available" },
    bare_root = { Namespace::Requested, "coordinator." },
    no_separator = { Namespace::Requested, "coordinator.requesteddb" },
)]
fn lock_name_rejects(ns: Namespace, flag: &str) {
    assert_eq!(ns.lock_name(flag), None);
}

#[test]
fn governs_only_both_namespaces() {
    assert!(Namespace::governs("coordinator.granted.db"));
    assert!(Namespace::governs("coordinator.requested.db"));
    assert!(Namespace::governs("coordinator.granted."));
    assert!(!Namespace::governs("coordinator.registered"));
    assert!(!Namespace::governs("leadership.is_leader"));
}
