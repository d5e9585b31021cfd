// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag namespaces governed by the coordinator layer
//!
//! Lock state is projected onto two flag namespaces:
//! - `coordinator.granted.<lock>` while the local member holds `<lock>`
//! - `coordinator.requested.<lock>` while the local member wants `<lock>`

/// Root of every flag this layer owns
pub const FLAG_ROOT: &str = "coordinator";

/// One of the two flag namespaces kept in sync with the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Granted,
    Requested,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::Granted, Namespace::Requested];

    /// Short name used in flags and logs
    pub fn name(self) -> &'static str {
        match self {
            Namespace::Granted => "granted",
            Namespace::Requested => "requested",
        }
    }

    /// Flag prefix including the trailing separator
    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::Granted => "coordinator.granted.",
            Namespace::Requested => "coordinator.requested.",
        }
    }

    /// Full flag name for a lock in this namespace
    pub fn flag(self, lock: &str) -> String {
        format!("{}{}", self.prefix(), lock)
    }

    /// Extract the lock name from a flag in this namespace.
    ///
    /// Everything after the prefix is the lock name, so lock names may
    /// themselves contain dots. The bare prefix is the flag of the empty
    /// lock name. Returns `None` for flags outside the namespace.
    pub fn lock_name(self, flag: &str) -> Option<&str> {
        flag.strip_prefix(self.prefix())
    }

    /// Whether a flag belongs to either governed namespace
    pub fn governs(flag: &str) -> bool {
        Self::ALL.iter().any(|ns| ns.lock_name(flag).is_some())
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "flag_tests.rs"]
mod tests;
