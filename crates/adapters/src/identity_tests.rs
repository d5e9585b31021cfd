// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn static_identity() {
    let identity = StaticIdentity::new("db/3");
    assert_eq!(identity.local_member().unwrap(), MemberId::new("db/3"));
}

#[test]
fn env_identity_missing_var() {
    let identity = EnvIdentity::from_var("COORD_TEST_SURELY_UNSET_VAR");

    let err = identity.local_member().unwrap_err();
    assert!(err.to_string().contains("COORD_TEST_SURELY_UNSET_VAR not set"));
}

#[test]
fn env_identity_reads_set_var() {
    // PATH is set in every test environment
    let identity = EnvIdentity::from_var("PATH");
    assert!(identity.local_member().is_ok());
}
