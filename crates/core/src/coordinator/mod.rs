// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lock-coordination backends
//!
//! A backend tracks, per peer-group member, which named locks are granted
//! and which are requested. This layer only reads that bookkeeping; how
//! grants are negotiated is up to each backend.
//!
//! Built-in backends:
//! - **SimpleCoordinator** - one holder per lock, oldest request first
//! - **SerialCoordinator** - one holder of any lock across the whole group

mod book;
mod serial;
mod simple;

pub use book::{BookError, LockBook};
pub use serial::SerialCoordinator;
pub use simple::SimpleCoordinator;

use crate::member::MemberId;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Opaque per-lock metadata recorded by a backend (request or grant time)
pub type LockMeta = String;

/// Locks of a single member, by lock name
pub type MemberLocks = BTreeMap<String, LockMeta>;

/// Per-member lock table, as exposed through `grants` and `requests`
pub type LockTable = BTreeMap<MemberId, MemberLocks>;

/// Errors raised by a coordination backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to construct backend: {0}")]
    Construct(String),
    #[error("failed to read backend state: {0}")]
    Read(String),
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Capability contract every coordination backend satisfies.
///
/// Backends are constructed from the peer-relation name by a factory
/// registered in [`crate::registry::BackendRegistry`].
pub trait Coordinator: Send + Sync + 'static {
    /// Peer relation this backend coordinates over
    fn relation(&self) -> &str;

    /// Granted locks per member
    fn grants(&self) -> Result<&LockTable, BackendError>;

    /// Requested locks per member (may include already granted locks)
    fn requests(&self) -> Result<&LockTable, BackendError>;

    /// Names of the locks granted to `member`, empty when it has no entry
    fn member_grants(&self, member: &MemberId) -> Result<BTreeSet<String>, BackendError> {
        Ok(lock_names(self.grants()?, member))
    }

    /// Names of the locks requested by `member`, empty when it has no entry
    fn member_requests(&self, member: &MemberId) -> Result<BTreeSet<String>, BackendError> {
        Ok(lock_names(self.requests()?, member))
    }

    /// Whether `member` currently holds `lock`
    fn granted(&self, member: &MemberId, lock: &str) -> Result<bool, BackendError> {
        Ok(self
            .grants()?
            .get(member)
            .is_some_and(|locks| locks.contains_key(lock)))
    }

    /// Whether `member` has an outstanding interest in `lock`
    fn requested(&self, member: &MemberId, lock: &str) -> Result<bool, BackendError> {
        Ok(self
            .requests()?
            .get(member)
            .is_some_and(|locks| locks.contains_key(lock)))
    }
}

fn lock_names(table: &LockTable, member: &MemberId) -> BTreeSet<String> {
    table
        .get(member)
        .map(|locks| locks.keys().cloned().collect())
        .unwrap_or_default()
}
