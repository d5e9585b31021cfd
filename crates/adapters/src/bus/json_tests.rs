// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn flags_persist_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state/flags.json");

    let bus = JsonFlagBus::open(&path);
    bus.set_flag("coordinator.granted.db").unwrap();
    bus.set_flag("db.available").unwrap();
    drop(bus);

    let reopened = JsonFlagBus::open(&path);
    assert!(reopened.is_set("coordinator.granted.db").unwrap());
    assert_eq!(reopened.list_set().unwrap().len(), 2);
}

#[test]
fn clear_and_prefix_listing() {
    let dir = tempfile::tempdir().unwrap();
    let bus = JsonFlagBus::open(dir.path().join("flags.json"));

    bus.set_flag("coordinator.granted.db").unwrap();
    bus.set_flag("coordinator.requested.db").unwrap();
    bus.clear_flag("coordinator.granted.db").unwrap();
    bus.clear_flag("coordinator.granted.never-set").unwrap();

    let listed = bus.list_prefixed("coordinator.requested.").unwrap();
    assert_eq!(listed.into_iter().collect::<Vec<_>>(), vec!["coordinator.requested.db"]);
    assert!(!bus.is_set("coordinator.granted.db").unwrap());
}

#[test]
fn missing_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let bus = JsonFlagBus::open(dir.path().join("flags.json"));

    assert!(bus.list_set().unwrap().is_empty());
    assert!(!bus.path().exists());
}

#[test]
fn corrupt_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flags.json");
    std::fs::write(&path, "{not a list").unwrap();

    let bus = JsonFlagBus::open(&path);

    assert!(matches!(bus.list_set(), Err(FlagBusError::Read(_))));
    assert!(matches!(bus.set_flag("x"), Err(FlagBusError::Read(_))));
}
