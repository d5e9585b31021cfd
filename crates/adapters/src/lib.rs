// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Host adapters for the coordinator layer

pub mod bus;
pub mod identity;
pub mod traced;

pub use bus::JsonFlagBus;
pub use identity::{EnvIdentity, StaticIdentity, LOCAL_MEMBER_VAR};
pub use traced::{TracedFlagBus, TracedIdentity};
