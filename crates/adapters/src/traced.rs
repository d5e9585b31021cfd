// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use coord_core::{FlagBus, FlagBusError, IdentityError, LocalIdentity, MemberId};
use std::collections::BTreeSet;

/// Wrapper that adds tracing to any FlagBus
#[derive(Clone)]
pub struct TracedFlagBus<B> {
    inner: B,
}

impl<B> TracedFlagBus<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: FlagBus> FlagBus for TracedFlagBus<B> {
    fn is_set(&self, flag: &str) -> Result<bool, FlagBusError> {
        let result = self.inner.is_set(flag);
        tracing::trace!(flag, set = ?result.as_ref().ok(), "checked");
        result
    }

    fn set_flag(&self, flag: &str) -> Result<(), FlagBusError> {
        let span = tracing::debug_span!("flags.set", flag);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.set_flag(flag);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "flag set"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "set failed"
            ),
        }

        result
    }

    fn clear_flag(&self, flag: &str) -> Result<(), FlagBusError> {
        let span = tracing::debug_span!("flags.clear", flag);
        let _guard = span.enter();

        let result = self.inner.clear_flag(flag);
        match &result {
            Ok(()) => tracing::debug!("flag cleared"),
            Err(e) => tracing::error!(error = %e, "clear failed"),
        }

        result
    }

    fn list_set(&self) -> Result<BTreeSet<String>, FlagBusError> {
        let result = self.inner.list_set();
        tracing::trace!(count = result.as_ref().map(|f| f.len()).ok(), "listed flags");
        result
    }

    fn list_prefixed(&self, prefix: &str) -> Result<BTreeSet<String>, FlagBusError> {
        let result = self.inner.list_prefixed(prefix);
        match &result {
            Ok(flags) => tracing::trace!(prefix, count = flags.len(), "listed flags"),
            Err(e) => tracing::error!(prefix, error = %e, "list failed"),
        }
        result
    }
}

/// Wrapper that logs identity resolution
#[derive(Clone)]
pub struct TracedIdentity<I> {
    inner: I,
}

impl<I> TracedIdentity<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: LocalIdentity> LocalIdentity for TracedIdentity<I> {
    fn local_member(&self) -> Result<MemberId, IdentityError> {
        let result = self.inner.local_member();
        match &result {
            Ok(member) => tracing::debug!(%member, "local member resolved"),
            Err(e) => tracing::error!(error = %e, "local member unknown"),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
