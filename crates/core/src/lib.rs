// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! coord-core: lock coordination projected onto host flags
//!
//! This crate provides:
//! - The `Coordinator` backend contract and built-in backends
//! - A registry resolving configured backend names to factories
//! - Flag reconciliation for the local peer-group member
//! - Once-per-process bootstrap wiring it into the host

pub mod config;
pub mod coordinator;
pub mod flag;
pub mod host;
pub mod member;
pub mod registry;
pub mod resolver;

// Start-up (order matters for dependencies)
pub mod error;
pub mod slot;
pub mod registration;
pub mod reconcile;
pub mod bootstrap;

// Re-exports
pub use bootstrap::{Bootstrap, Bootstrapped, PEER_RELATION, RECONCILE_HOOK};
pub use config::{ConfigError, CoordinatorOptions, LayerOptions, COORDINATOR_LAYER};
pub use coordinator::{
    BackendError, BookError, Coordinator, LockBook, LockMeta, LockTable, MemberLocks,
    SerialCoordinator, SimpleCoordinator,
};
pub use error::BootstrapError;
pub use flag::Namespace;
pub use host::{
    FlagBus, FlagBusError, HookError, HookRunner, IdentityError, LocalIdentity, StartHook,
    StartupScheduler,
};
pub use member::MemberId;
pub use reconcile::{
    reconcile, NamespaceChange, NamespaceDelta, ReconcileError, ReconcilePlan, ReconcileReport,
    Reconciler,
};
pub use registration::RegistrationGuard;
pub use registry::{BackendRegistry, Export, ResolutionError, DEFAULT_CLASS, DEFAULT_MODULE};
pub use slot::{coordinator, CoordinatorSlot};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use host::{FakeFlagBus, FakeIdentity, FlagCall};
