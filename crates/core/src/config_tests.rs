// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn coordinator_class_from_toml() {
    let options = LayerOptions::parse(
        r#"
        [coordinator]
        class = "coordinator.SerialCoordinator"
        log_level = "debug"

        [basic]
        packages = ["git"]
        "#,
    )
    .unwrap();

    let coordinator = options.coordinator().unwrap();
    assert_eq!(coordinator.class(), Some("coordinator.SerialCoordinator"));
    assert!(options.options("basic").contains_key("packages"));
}

#[test]
fn missing_layer_has_no_class() {
    let options = LayerOptions::parse("[basic]\n").unwrap();

    assert!(options.options(COORDINATOR_LAYER).is_empty());
    assert_eq!(options.coordinator().unwrap(), CoordinatorOptions::default());
}

#[test]
fn non_string_class_is_rejected() {
    let options = LayerOptions::parse("[coordinator]\nclass = 3\n").unwrap();

    assert!(matches!(
        options.coordinator(),
        Err(ConfigError::Layer { layer, .. }) if layer == "coordinator"
    ));
}

#[test]
fn load_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let options = LayerOptions::load(&dir.path().join("layer.toml")).unwrap();

    assert_eq!(options.coordinator().unwrap().class(), None);
}

#[test]
fn load_reports_bad_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layer.toml");
    std::fs::write(&path, "[coordinator\n").unwrap();

    assert!(matches!(
        LayerOptions::load(&path),
        Err(ConfigError::Toml { .. })
    ));
}
