// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistent grant/request book shared by the built-in backends

use super::{LockMeta, LockTable};
use crate::member::MemberId;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or saving a lock book
#[derive(Debug, Error)]
pub enum BookError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid lock book {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Grant and request tables for every member of a peer relation.
///
/// Metadata values are RFC 3339 timestamps: request time in `requests`,
/// grant time in `grants`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockBook {
    #[serde(default)]
    pub grants: LockTable,
    #[serde(default)]
    pub requests: LockTable,
}

impl LockBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the book for `relation` inside a state directory
    pub fn path_for(state_dir: &Path, relation: &str) -> PathBuf {
        state_dir.join(format!("{relation}.json"))
    }

    /// Load a book, treating a missing file as an empty book
    pub fn load(path: &Path) -> Result<Self, BookError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(BookError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| BookError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the book, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), BookError> {
        let io_err = |source| BookError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| BookError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)
    }

    /// Record interest in a lock. An existing request keeps its timestamp.
    ///
    /// Returns true if the request is new.
    pub fn request(&mut self, member: &MemberId, lock: &str) -> bool {
        let locks = self.requests.entry(member.clone()).or_default();
        if locks.contains_key(lock) {
            return false;
        }
        locks.insert(lock.to_string(), now());
        true
    }

    /// Drop both the request and the grant of a lock.
    ///
    /// Returns true if anything was removed.
    pub fn release(&mut self, member: &MemberId, lock: &str) -> bool {
        let requested = remove_entry(&mut self.requests, member, lock);
        let granted = remove_entry(&mut self.grants, member, lock);
        requested || granted
    }

    /// Grant `lock` to `member`
    pub fn grant(&mut self, member: &MemberId, lock: &str) {
        self.grants
            .entry(member.clone())
            .or_default()
            .insert(lock.to_string(), now());
    }

    /// Revoke grants whose request has gone away.
    ///
    /// Returns the revoked `(member, lock)` pairs.
    pub fn prune_unrequested(&mut self) -> Vec<(MemberId, String)> {
        let stale: Vec<(MemberId, String)> = self
            .grants
            .iter()
            .flat_map(|(member, locks)| locks.keys().map(move |lock| (member, lock)))
            .filter(|(member, lock)| {
                !self
                    .requests
                    .get(*member)
                    .is_some_and(|wanted| wanted.contains_key(*lock))
            })
            .map(|(member, lock)| (member.clone(), lock.clone()))
            .collect();
        for (member, lock) in &stale {
            remove_entry(&mut self.grants, member, lock);
        }
        stale
    }

    /// Current holder of a lock, if any
    pub fn holder(&self, lock: &str) -> Option<&MemberId> {
        self.grants
            .iter()
            .find(|(_, locks)| locks.contains_key(lock))
            .map(|(member, _)| member)
    }

    /// Whether any member holds any lock
    pub fn any_granted(&self) -> bool {
        self.grants.values().any(|locks| !locks.is_empty())
    }

    /// Requests not yet granted, oldest first (ties broken by member, lock)
    pub fn pending(&self) -> Vec<(MemberId, String)> {
        let mut pending: Vec<(&LockMeta, &MemberId, &String)> = self
            .requests
            .iter()
            .flat_map(|(member, locks)| locks.iter().map(move |(lock, at)| (at, member, lock)))
            .filter(|(_, member, lock)| {
                !self
                    .grants
                    .get(*member)
                    .is_some_and(|held| held.contains_key(*lock))
            })
            .collect();
        pending.sort();
        pending
            .into_iter()
            .map(|(_, member, lock)| (member.clone(), lock.clone()))
            .collect()
    }
}

fn remove_entry(table: &mut LockTable, member: &MemberId, lock: &str) -> bool {
    let Some(locks) = table.get_mut(member) else {
        return false;
    };
    let removed = locks.remove(lock).is_some();
    if locks.is_empty() {
        table.remove(member);
    }
    removed
}

fn now() -> LockMeta {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod tests;
