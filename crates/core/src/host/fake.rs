// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake host collaborators for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FlagBus, FlagBusError, IdentityError, LocalIdentity};
use crate::member::MemberId;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

/// Recorded flag bus call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagCall {
    IsSet { flag: String },
    Set { flag: String },
    Clear { flag: String },
    ListSet,
    ListPrefixed { prefix: String },
}

impl FlagCall {
    /// Flag or prefix this call touched, `None` for a full listing
    pub fn target(&self) -> Option<&str> {
        match self {
            FlagCall::IsSet { flag } | FlagCall::Set { flag } | FlagCall::Clear { flag } => {
                Some(flag)
            }
            FlagCall::ListPrefixed { prefix } => Some(prefix),
            FlagCall::ListSet => None,
        }
    }
}

#[derive(Default)]
struct FakeBusState {
    flags: BTreeSet<String>,
    calls: Vec<FlagCall>,
    fail_reads: bool,
    /// Number of writes allowed before writes start failing
    writes_left: Option<usize>,
}

/// In-memory flag bus recording every call
#[derive(Clone, Default)]
pub struct FakeFlagBus {
    state: Arc<Mutex<FakeBusState>>,
}

impl FakeFlagBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus with the given flags already set
    pub fn with_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bus = Self::new();
        bus.lock().flags = flags.into_iter().map(Into::into).collect();
        bus
    }

    /// Snapshot of the set flags
    pub fn flags(&self) -> BTreeSet<String> {
        self.lock().flags.clone()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<FlagCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Make every read fail
    pub fn fail_reads(&self) {
        self.lock().fail_reads = true;
    }

    /// Allow `n` more writes, then fail every write
    pub fn fail_writes_after(&self, n: usize) {
        self.lock().writes_left = Some(n);
    }

    /// Restore normal operation
    pub fn heal(&self) {
        let mut state = self.lock();
        state.fail_reads = false;
        state.writes_left = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeBusState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self, call: FlagCall, apply: impl FnOnce(&mut BTreeSet<String>)) -> Result<(), FlagBusError> {
        let mut state = self.lock();
        let flag = call.target().unwrap_or_default().to_string();
        state.calls.push(call);
        if let Some(left) = state.writes_left.as_mut() {
            if *left == 0 {
                return Err(FlagBusError::Write {
                    flag,
                    message: "injected failure".to_string(),
                });
            }
            *left -= 1;
        }
        apply(&mut state.flags);
        Ok(())
    }

    fn read<T>(&self, call: FlagCall, view: impl FnOnce(&BTreeSet<String>) -> T) -> Result<T, FlagBusError> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.fail_reads {
            return Err(FlagBusError::Read("injected failure".to_string()));
        }
        Ok(view(&state.flags))
    }
}

impl FlagBus for FakeFlagBus {
    fn is_set(&self, flag: &str) -> Result<bool, FlagBusError> {
        self.read(
            FlagCall::IsSet {
                flag: flag.to_string(),
            },
            |flags| flags.contains(flag),
        )
    }

    fn set_flag(&self, flag: &str) -> Result<(), FlagBusError> {
        self.write(
            FlagCall::Set {
                flag: flag.to_string(),
            },
            |flags| {
                flags.insert(flag.to_string());
            },
        )
    }

    fn clear_flag(&self, flag: &str) -> Result<(), FlagBusError> {
        self.write(
            FlagCall::Clear {
                flag: flag.to_string(),
            },
            |flags| {
                flags.remove(flag);
            },
        )
    }

    fn list_set(&self) -> Result<BTreeSet<String>, FlagBusError> {
        self.read(FlagCall::ListSet, |flags| flags.clone())
    }

    fn list_prefixed(&self, prefix: &str) -> Result<BTreeSet<String>, FlagBusError> {
        self.read(
            FlagCall::ListPrefixed {
                prefix: prefix.to_string(),
            },
            |flags| {
                flags
                    .iter()
                    .filter(|flag| flag.starts_with(prefix))
                    .cloned()
                    .collect()
            },
        )
    }
}

/// Identity provider returning a fixed member, or failing
#[derive(Clone, Debug)]
pub struct FakeIdentity {
    member: Option<MemberId>,
}

impl FakeIdentity {
    pub fn new(member: impl Into<String>) -> Self {
        Self {
            member: Some(MemberId::new(member)),
        }
    }

    /// Identity provider that cannot resolve the local member
    pub fn unknown() -> Self {
        Self { member: None }
    }
}

impl LocalIdentity for FakeIdentity {
    fn local_member(&self) -> Result<MemberId, IdentityError> {
        self.member
            .clone()
            .ok_or_else(|| IdentityError::Unknown("no member configured".to_string()))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
