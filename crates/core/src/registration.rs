// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Once-per-process registration of the reconciliation hook

use std::sync::atomic::{AtomicBool, Ordering};

/// Sentinel recording that the reconciliation hook has been registered.
///
/// Once set it stays set for the rest of the process.
#[derive(Debug, Default)]
pub struct RegistrationGuard {
    registered: AtomicBool,
}

static GLOBAL_GUARD: RegistrationGuard = RegistrationGuard::new();

impl RegistrationGuard {
    pub const fn new() -> Self {
        Self {
            registered: AtomicBool::new(false),
        }
    }

    /// Process-wide guard
    pub fn global() -> &'static RegistrationGuard {
        &GLOBAL_GUARD
    }

    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    /// Run `register` unless a previous call already did.
    ///
    /// Returns true if `register` ran.
    pub fn register_once(&self, register: impl FnOnce()) -> bool {
        if self
            .registered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        register();
        true
    }
}

#[cfg(test)]
#[path = "registration_tests.rs"]
mod tests;
