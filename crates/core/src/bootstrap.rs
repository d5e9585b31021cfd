// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordinator layer start-up
//!
//! Resolves and publishes the backend, then registers flag reconciliation
//! with the host's start-up scheduler. Safe to enter repeatedly: the backend
//! is constructed once and the hook is registered once per process.

use crate::config::CoordinatorOptions;
use crate::coordinator::Coordinator;
use crate::error::BootstrapError;
use crate::host::{FlagBus, LocalIdentity, StartupScheduler};
use crate::reconcile::Reconciler;
use crate::registration::RegistrationGuard;
use crate::registry::BackendRegistry;
use crate::resolver;
use crate::slot::CoordinatorSlot;
use std::sync::Arc;

/// Peer relation the coordinator negotiates locks over
pub const PEER_RELATION: &str = "coordinator";

/// Name the reconciliation hook is registered under
pub const RECONCILE_HOOK: &str = "coordinator.reconcile";

/// Result of one bootstrap entry
#[derive(Clone)]
pub struct Bootstrapped {
    pub coordinator: Arc<dyn Coordinator>,
    /// This entry constructed and published the backend
    pub published: bool,
    /// This entry registered the reconciliation hook
    pub registered: bool,
}

/// Bootstrap entry point, bound to a slot and registration guard
pub struct Bootstrap<'a> {
    registry: &'a BackendRegistry,
    slot: &'a CoordinatorSlot,
    guard: &'a RegistrationGuard,
}

impl<'a> Bootstrap<'a> {
    /// Bootstrap against the process-wide slot and guard
    pub fn new(registry: &'a BackendRegistry) -> Self {
        Self {
            registry,
            slot: CoordinatorSlot::global(),
            guard: RegistrationGuard::global(),
        }
    }

    pub fn with_slot(mut self, slot: &'a CoordinatorSlot) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_guard(mut self, guard: &'a RegistrationGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Publish the configured backend and register reconciliation.
    ///
    /// Resolution errors are fatal: nothing is published or registered.
    pub fn run<S, B, I>(
        &self,
        options: &CoordinatorOptions,
        scheduler: &S,
        bus: B,
        identity: I,
    ) -> Result<Bootstrapped, BootstrapError>
    where
        S: StartupScheduler + ?Sized,
        B: FlagBus,
        I: LocalIdentity,
    {
        let span = tracing::info_span!("coordinator.bootstrap", class = resolver::class_name(options));
        let _guard = span.enter();

        let (coordinator, published) = self
            .slot
            .get_or_publish(|| resolver::instantiate(self.registry, options, PEER_RELATION))
            .inspect_err(|e| tracing::error!(error = %e, "backend resolution failed"))?;
        if !published {
            tracing::warn!("coordinator already published, reusing it");
        }

        let hook_coordinator = Arc::clone(&coordinator);
        let registered = self.guard.register_once(|| {
            let reconciler = Reconciler::new(hook_coordinator, bus, identity);
            scheduler.at_start(RECONCILE_HOOK, reconciler.into_hook());
        });
        if registered {
            tracing::info!(hook = RECONCILE_HOOK, "reconciliation registered");
        } else {
            tracing::debug!(hook = RECONCILE_HOOK, "reconciliation already registered");
        }

        Ok(Bootstrapped {
            coordinator,
            published,
            registered,
        })
    }
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
