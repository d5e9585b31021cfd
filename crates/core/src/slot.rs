// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Well-known location of the coordinator singleton

use crate::coordinator::Coordinator;
use std::sync::{Arc, Mutex};

/// Holds the process's coordinator once it has been constructed.
///
/// Publication happens at most once; the published instance is never
/// replaced or removed.
#[derive(Default)]
pub struct CoordinatorSlot {
    coordinator: Mutex<Option<Arc<dyn Coordinator>>>,
}

static GLOBAL_SLOT: CoordinatorSlot = CoordinatorSlot::new();

impl CoordinatorSlot {
    pub const fn new() -> Self {
        Self {
            coordinator: Mutex::new(None),
        }
    }

    /// Process-wide slot
    pub fn global() -> &'static CoordinatorSlot {
        &GLOBAL_SLOT
    }

    /// The published coordinator, if any
    pub fn get(&self) -> Option<Arc<dyn Coordinator>> {
        self.coordinator
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_published(&self) -> bool {
        self.get().is_some()
    }

    /// Return the published coordinator, or build and publish one.
    ///
    /// `init` runs at most once across all callers; if it fails nothing is
    /// published and a later call may try again. The flag is true when this
    /// call published the coordinator.
    pub fn get_or_publish<E>(
        &self,
        init: impl FnOnce() -> Result<Arc<dyn Coordinator>, E>,
    ) -> Result<(Arc<dyn Coordinator>, bool), E> {
        let mut slot = self.coordinator.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = slot.as_ref() {
            return Ok((Arc::clone(existing), false));
        }
        let coordinator = init()?;
        *slot = Some(Arc::clone(&coordinator));
        Ok((coordinator, true))
    }
}

/// The coordinator published for this process, for callers that need to
/// query grants and requests directly
pub fn coordinator() -> Option<Arc<dyn Coordinator>> {
    CoordinatorSlot::global().get()
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
