// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default backend: one holder per lock

use super::{BackendError, Coordinator, LockBook, LockTable};
use crate::member::MemberId;
use std::path::{Path, PathBuf};

/// Grants each lock to at most one member at a time.
///
/// Pending requests are granted oldest-first whenever their lock is free.
/// Different locks may be held by different members concurrently.
#[derive(Clone, Debug)]
pub struct SimpleCoordinator {
    relation: String,
    book: LockBook,
    path: Option<PathBuf>,
}

impl SimpleCoordinator {
    /// In-memory coordinator with an empty book
    pub fn new(relation: impl Into<String>) -> Self {
        Self::from_book(relation, LockBook::new())
    }

    /// Coordinator over an existing book; settles it immediately
    pub fn from_book(relation: impl Into<String>, mut book: LockBook) -> Self {
        Self::settle(&mut book);
        Self {
            relation: relation.into(),
            book,
            path: None,
        }
    }

    /// Load the relation's book from `state_dir`, settle it and write it back
    pub fn open(relation: impl Into<String>, state_dir: &Path) -> Result<Self, BackendError> {
        let relation = relation.into();
        let path = LockBook::path_for(state_dir, &relation);
        let mut coordinator = Self::from_book(relation, LockBook::load(&path)?);
        coordinator.book.save(&path)?;
        coordinator.path = Some(path);
        Ok(coordinator)
    }

    /// Run one grant pass. Returns newly granted `(member, lock)` pairs.
    pub fn settle(book: &mut LockBook) -> Vec<(MemberId, String)> {
        for (member, lock) in book.prune_unrequested() {
            tracing::debug!(%member, lock = %lock, "revoked unrequested grant");
        }
        let mut granted = Vec::new();
        for (member, lock) in book.pending() {
            if book.holder(&lock).is_none() {
                tracing::debug!(%member, lock = %lock, "granted");
                book.grant(&member, &lock);
                granted.push((member, lock));
            }
        }
        granted
    }

    pub fn book(&self) -> &LockBook {
        &self.book
    }

    /// Book file backing this coordinator, if persistent
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Coordinator for SimpleCoordinator {
    fn relation(&self) -> &str {
        &self.relation
    }

    fn grants(&self) -> Result<&LockTable, BackendError> {
        Ok(&self.book.grants)
    }

    fn requests(&self) -> Result<&LockTable, BackendError> {
        Ok(&self.book.requests)
    }
}

#[cfg(test)]
#[path = "simple_tests.rs"]
mod tests;
