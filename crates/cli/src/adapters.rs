// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host wiring for CLI commands

use coord_adapters::{EnvIdentity, JsonFlagBus, StaticIdentity, TracedFlagBus, TracedIdentity};
use coord_core::{IdentityError, LocalIdentity, LockBook, MemberId, PEER_RELATION};
use std::path::{Path, PathBuf};

/// Flag file inside the state directory
const FLAGS_FILE: &str = "flags.json";

/// Options file inside the state directory
const CONFIG_FILE: &str = "layer.toml";

/// Member identity from `--member`, falling back to the environment
#[derive(Clone, Debug)]
pub enum CliIdentity {
    Static(StaticIdentity),
    Env(EnvIdentity),
}

impl LocalIdentity for CliIdentity {
    fn local_member(&self) -> Result<MemberId, IdentityError> {
        match self {
            CliIdentity::Static(identity) => identity.local_member(),
            CliIdentity::Env(identity) => identity.local_member(),
        }
    }
}

/// Paths and identity shared by every command
pub struct Context {
    state_dir: PathBuf,
    config: Option<PathBuf>,
    member: Option<String>,
}

impl Context {
    pub fn new(state_dir: PathBuf, config: Option<PathBuf>, member: Option<String>) -> Self {
        Self {
            state_dir,
            config,
            member,
        }
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.state_dir.join(CONFIG_FILE))
    }

    pub fn book_path(&self) -> PathBuf {
        LockBook::path_for(&self.state_dir, PEER_RELATION)
    }

    pub fn flag_bus(&self) -> TracedFlagBus<JsonFlagBus> {
        TracedFlagBus::new(JsonFlagBus::open(self.state_dir.join(FLAGS_FILE)))
    }

    pub fn identity(&self) -> TracedIdentity<CliIdentity> {
        let identity = match &self.member {
            Some(member) => CliIdentity::Static(StaticIdentity::new(member.clone())),
            None => CliIdentity::Env(EnvIdentity::new()),
        };
        TracedIdentity::new(identity)
    }
}
