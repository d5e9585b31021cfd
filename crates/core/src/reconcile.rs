// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag reconciliation
//!
//! Projects the local member's grants and requests onto the
//! `coordinator.granted.*` and `coordinator.requested.*` flags. Every run
//! re-derives the full desired state, so runs are idempotent and a run that
//! failed halfway is repaired by the next one.
//!
//! A lock both granted and requested has both flags set; the requested flag
//! is only cleared once the lock leaves the requests table.

use crate::coordinator::{BackendError, Coordinator};
use crate::flag::Namespace;
use crate::host::{FlagBus, FlagBusError, HookError, IdentityError, LocalIdentity, StartHook};
use crate::member::MemberId;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Errors that abort a reconciliation run
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error(transparent)]
    FlagBus(#[from] FlagBusError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Desired versus current lock names for one namespace
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceDelta {
    pub namespace: Namespace,
    /// Lock names the backend reports for the local member
    pub desired: BTreeSet<String>,
    /// Lock names with a flag currently set
    pub current: BTreeSet<String>,
}

impl NamespaceDelta {
    /// Flags to clear: set now but no longer desired
    pub fn to_remove(&self) -> BTreeSet<String> {
        self.current.difference(&self.desired).cloned().collect()
    }

    /// Flags to set: every desired name, set unconditionally
    pub fn to_add(&self) -> &BTreeSet<String> {
        &self.desired
    }

    /// Desired names whose flag is not set yet
    pub fn newly_set(&self) -> BTreeSet<String> {
        self.desired.difference(&self.current).cloned().collect()
    }

    pub fn is_noop(&self) -> bool {
        self.desired == self.current
    }

    fn apply<B: FlagBus>(&self, bus: &B) -> Result<NamespaceChange, FlagBusError> {
        let removed = self.to_remove();
        for lock in &removed {
            bus.clear_flag(&self.namespace.flag(lock))?;
            tracing::debug!(namespace = %self.namespace, lock = %lock, "cleared");
        }
        for lock in self.to_add() {
            bus.set_flag(&self.namespace.flag(lock))?;
        }
        let added = self.newly_set();
        for lock in &added {
            tracing::debug!(namespace = %self.namespace, lock = %lock, "set");
        }
        Ok(NamespaceChange { added, removed })
    }
}

/// Everything read for one run; computing it performs no writes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub member: MemberId,
    pub granted: NamespaceDelta,
    pub requested: NamespaceDelta,
}

impl ReconcilePlan {
    /// Read backend and flag state for `member`
    pub fn read<C, B>(coordinator: &C, bus: &B, member: MemberId) -> Result<Self, ReconcileError>
    where
        C: Coordinator + ?Sized,
        B: FlagBus,
    {
        let granted = NamespaceDelta {
            namespace: Namespace::Granted,
            desired: coordinator.member_grants(&member)?,
            current: current_locks(bus, Namespace::Granted)?,
        };
        let requested = NamespaceDelta {
            namespace: Namespace::Requested,
            desired: coordinator.member_requests(&member)?,
            current: current_locks(bus, Namespace::Requested)?,
        };
        Ok(Self {
            member,
            granted,
            requested,
        })
    }

    pub fn is_noop(&self) -> bool {
        self.granted.is_noop() && self.requested.is_noop()
    }

    /// Write the plan to the bus.
    ///
    /// Flags are written independently, so a failure part way leaves the
    /// earlier writes in place.
    pub fn apply<B: FlagBus>(&self, bus: &B) -> Result<ReconcileReport, FlagBusError> {
        Ok(ReconcileReport {
            member: self.member.clone(),
            granted: self.granted.apply(bus)?,
            requested: self.requested.apply(bus)?,
        })
    }
}

/// Lock names whose flag is set in `namespace`
fn current_locks<B: FlagBus>(bus: &B, namespace: Namespace) -> Result<BTreeSet<String>, FlagBusError> {
    Ok(bus
        .list_prefixed(namespace.prefix())?
        .iter()
        .filter_map(|flag| namespace.lock_name(flag))
        .map(str::to_string)
        .collect())
}

/// Flag changes made in one namespace
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceChange {
    pub added: BTreeSet<String>,
    pub removed: BTreeSet<String>,
}

/// Outcome of a reconciliation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconcileReport {
    pub member: MemberId,
    pub granted: NamespaceChange,
    pub requested: NamespaceChange,
}

impl ReconcileReport {
    pub fn changed(&self) -> bool {
        [&self.granted, &self.requested]
            .iter()
            .any(|change| !change.added.is_empty() || !change.removed.is_empty())
    }
}

/// Read the local member's state and bring the flags in line with it.
///
/// All reads complete before the first write; a failed read leaves the bus
/// untouched.
pub fn reconcile<C, B, I>(coordinator: &C, bus: &B, identity: &I) -> Result<ReconcileReport, ReconcileError>
where
    C: Coordinator + ?Sized,
    B: FlagBus,
    I: LocalIdentity,
{
    let member = identity.local_member()?;
    let span = tracing::info_span!("coordinator.reconcile", %member);
    let _guard = span.enter();

    let plan = ReconcilePlan::read(coordinator, bus, member)?;
    tracing::debug!(
        granted = plan.granted.desired.len(),
        requested = plan.requested.desired.len(),
        "desired state read"
    );

    let report = plan.apply(bus)?;
    if report.changed() {
        tracing::info!(
            granted_added = report.granted.added.len(),
            granted_removed = report.granted.removed.len(),
            requested_added = report.requested.added.len(),
            requested_removed = report.requested.removed.len(),
            "flags reconciled"
        );
    }
    Ok(report)
}

/// Reconciliation bound to its collaborators, ready to run as a start hook
pub struct Reconciler<B, I> {
    coordinator: Arc<dyn Coordinator>,
    bus: B,
    identity: I,
}

impl<B: FlagBus, I: LocalIdentity> Reconciler<B, I> {
    pub fn new(coordinator: Arc<dyn Coordinator>, bus: B, identity: I) -> Self {
        Self {
            coordinator,
            bus,
            identity,
        }
    }

    pub fn run(&self) -> Result<ReconcileReport, ReconcileError> {
        reconcile(self.coordinator.as_ref(), &self.bus, &self.identity).inspect_err(|e| {
            tracing::error!(error = %e, "reconciliation aborted");
        })
    }

    /// Wrap this reconciler as a start hook
    pub fn into_hook(self) -> StartHook {
        Box::new(move || self.run().map(|_| ()).map_err(HookError::from))
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
