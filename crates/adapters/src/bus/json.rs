// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag bus persisted as a JSON array of flag names
//!
//! Every call reads the file; every mutation writes it back before
//! returning, so flags survive process restarts.

use coord_core::{FlagBus, FlagBusError};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// File-backed flag bus
#[derive(Clone, Debug)]
pub struct JsonFlagBus {
    path: PathBuf,
    /// Serializes read-modify-write cycles between clones
    write_lock: Arc<Mutex<()>>,
}

impl JsonFlagBus {
    /// Bus stored at `path`; the file is created on first write
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeSet<String>, FlagBusError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => {
                return Err(FlagBusError::Read(format!(
                    "{}: {e}",
                    self.path.display()
                )))
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeSet::new());
        }
        serde_json::from_str(&raw)
            .map_err(|e| FlagBusError::Read(format!("{}: {e}", self.path.display())))
    }

    fn store(&self, flags: &BTreeSet<String>) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(flags).map_err(|e| e.to_string())?;
        // Write then rename so readers never see a partial file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| e.to_string())?;
        fs::rename(&tmp, &self.path).map_err(|e| e.to_string())
    }

    fn update(
        &self,
        flag: &str,
        change: impl FnOnce(&mut BTreeSet<String>) -> bool,
    ) -> Result<(), FlagBusError> {
        let _lock = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut flags = self.load()?;
        if !change(&mut flags) {
            return Ok(());
        }
        self.store(&flags).map_err(|message| FlagBusError::Write {
            flag: flag.to_string(),
            message,
        })
    }
}

impl FlagBus for JsonFlagBus {
    fn is_set(&self, flag: &str) -> Result<bool, FlagBusError> {
        Ok(self.load()?.contains(flag))
    }

    fn set_flag(&self, flag: &str) -> Result<(), FlagBusError> {
        self.update(flag, |flags| flags.insert(flag.to_string()))
    }

    fn clear_flag(&self, flag: &str) -> Result<(), FlagBusError> {
        self.update(flag, |flags| flags.remove(flag))
    }

    fn list_set(&self) -> Result<BTreeSet<String>, FlagBusError> {
        self.load()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
