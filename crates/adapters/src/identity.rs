// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local member identity providers

use coord_core::{IdentityError, LocalIdentity, MemberId};

/// Environment variable naming the local member
pub const LOCAL_MEMBER_VAR: &str = "COORD_LOCAL_MEMBER";

/// Reads the local member from an environment variable
#[derive(Clone, Debug)]
pub struct EnvIdentity {
    var: String,
}

impl EnvIdentity {
    pub fn new() -> Self {
        Self::from_var(LOCAL_MEMBER_VAR)
    }

    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalIdentity for EnvIdentity {
    fn local_member(&self) -> Result<MemberId, IdentityError> {
        match std::env::var(&self.var) {
            Ok(member) if !member.trim().is_empty() => Ok(MemberId::new(member.trim())),
            Ok(_) => Err(IdentityError::Unknown(format!("{} is empty", self.var))),
            Err(_) => Err(IdentityError::Unknown(format!("{} not set", self.var))),
        }
    }
}

/// Fixed identity, e.g. from a command-line flag
#[derive(Clone, Debug)]
pub struct StaticIdentity(MemberId);

impl StaticIdentity {
    pub fn new(member: impl Into<String>) -> Self {
        Self(MemberId::new(member))
    }
}

impl LocalIdentity for StaticIdentity {
    fn local_member(&self) -> Result<MemberId, IdentityError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
