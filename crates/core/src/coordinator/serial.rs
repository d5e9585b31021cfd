// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend granting a single lock across the whole peer group

use super::{BackendError, Coordinator, LockBook, LockTable};
use crate::member::MemberId;
use std::path::{Path, PathBuf};

/// Grants at most one lock to one member at a time, regardless of name.
///
/// Useful for rolling operations where members must take turns.
#[derive(Clone, Debug)]
pub struct SerialCoordinator {
    relation: String,
    book: LockBook,
    path: Option<PathBuf>,
}

impl SerialCoordinator {
    pub fn new(relation: impl Into<String>) -> Self {
        Self::from_book(relation, LockBook::new())
    }

    pub fn from_book(relation: impl Into<String>, mut book: LockBook) -> Self {
        Self::settle(&mut book);
        Self {
            relation: relation.into(),
            book,
            path: None,
        }
    }

    pub fn open(relation: impl Into<String>, state_dir: &Path) -> Result<Self, BackendError> {
        let relation = relation.into();
        let path = LockBook::path_for(state_dir, &relation);
        let mut coordinator = Self::from_book(relation, LockBook::load(&path)?);
        coordinator.book.save(&path)?;
        coordinator.path = Some(path);
        Ok(coordinator)
    }

    /// Grant the oldest pending request if nothing is held
    pub fn settle(book: &mut LockBook) -> Option<(MemberId, String)> {
        for (member, lock) in book.prune_unrequested() {
            tracing::debug!(%member, lock = %lock, "revoked unrequested grant");
        }
        if book.any_granted() {
            return None;
        }
        let (member, lock) = book.pending().into_iter().next()?;
        tracing::debug!(%member, lock = %lock, "granted");
        book.grant(&member, &lock);
        Some((member, lock))
    }

    pub fn book(&self) -> &LockBook {
        &self.book
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Coordinator for SerialCoordinator {
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
#[path = "serial_tests.rs"]
mod tests;
