// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag bus adapters

mod json;

pub use json::JsonFlagBus;
