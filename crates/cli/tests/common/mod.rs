// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for coordctl integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch state directory driven through the coordctl binary
pub struct Host {
    dir: TempDir,
}

impl Host {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn state_dir(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    /// coordctl bound to this host's state dir, acting as `member`
    pub fn as_member(&self, member: &str) -> Command {
        let mut cmd = self.coordctl();
        cmd.args(["--member", member]);
        cmd
    }

    /// coordctl bound to this host's state dir with no member override
    pub fn coordctl(&self) -> Command {
        let mut cmd = Command::cargo_bin("coordctl").expect("coordctl binary");
        cmd.current_dir(self.path())
            .env_remove("COORD_LOCAL_MEMBER")
            .env_remove("COORD_LOG")
            .arg("--state-dir")
            .arg(self.state_dir());
        cmd
    }

    /// Write layer options to the default config location
    pub fn layer_options(&self, toml: &str) {
        fs::create_dir_all(self.state_dir()).expect("create state dir");
        fs::write(self.state_dir().join("layer.toml"), toml).expect("write layer options");
    }

    /// Seed the flag file with `flags`
    pub fn seed_flags(&self, flags: &[&str]) {
        fs::create_dir_all(self.state_dir()).expect("create state dir");
        let json = serde_json::to_string(flags).expect("serialize flags");
        fs::write(self.state_dir().join("flags.json"), json).expect("write flags");
    }

    /// Flags currently persisted, sorted
    pub fn flags(&self) -> Vec<String> {
        match fs::read_to_string(self.state_dir().join("flags.json")) {
            Ok(raw) => serde_json::from_str(&raw).expect("parse flags"),
            Err(_) => Vec::new(),
        }
    }

    /// Parsed lock book for the coordinator relation
    pub fn book(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.state_dir().join("coordinator.json"))
            .expect("read lock book");
        serde_json::from_str(&raw).expect("parse lock book")
    }
}
