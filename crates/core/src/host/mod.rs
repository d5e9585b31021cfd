// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host collaborators consumed by the coordinator layer
//!
//! - **FlagBus** - boolean flag store shared with the rest of the host
//! - **LocalIdentity** - which peer-group member this process is
//! - **StartupScheduler** - hooks run at the start of every invocation

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeFlagBus, FakeIdentity, FlagCall};

mod runner;
pub use runner::HookRunner;

use crate::member::MemberId;
use crate::reconcile::ReconcileError;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors reading or writing the flag bus
#[derive(Debug, Error)]
pub enum FlagBusError {
    #[error("flag bus read failed: {0}")]
    Read(String),
    #[error("flag bus write failed for {flag}: {message}")]
    Write { flag: String, message: String },
}

/// Errors resolving the local member
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("local member unknown: {0}")]
    Unknown(String),
}

/// Errors raised by a start-up hook
#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

/// Callback run at the start of each host invocation
pub type StartHook = Box<dyn FnMut() -> Result<(), HookError> + Send>;

/// Boolean flag store keyed by dotted flag name
pub trait FlagBus: Clone + Send + Sync + 'static {
    /// Whether a flag is currently set
    fn is_set(&self, flag: &str) -> Result<bool, FlagBusError>;

    /// Set a flag. Setting an already-set flag is a no-op.
    fn set_flag(&self, flag: &str) -> Result<(), FlagBusError>;

    /// Clear a flag. Clearing an unset flag is a no-op.
    fn clear_flag(&self, flag: &str) -> Result<(), FlagBusError>;

    /// Every flag currently set
    fn list_set(&self) -> Result<BTreeSet<String>, FlagBusError>;

    /// Flags currently set under `prefix`
    fn list_prefixed(&self, prefix: &str) -> Result<BTreeSet<String>, FlagBusError> {
        Ok(self
            .list_set()?
            .into_iter()
            .filter(|flag| flag.starts_with(prefix))
            .collect())
    }
}

/// Source of the local member's identity; stable for the process lifetime
pub trait LocalIdentity: Clone + Send + Sync + 'static {
    fn local_member(&self) -> Result<MemberId, IdentityError>;
}

/// Host mechanism running registered hooks at every invocation start
pub trait StartupScheduler {
    /// Register `hook` to run at the start of every future invocation
    fn at_start(&self, name: &str, hook: StartHook);
}
