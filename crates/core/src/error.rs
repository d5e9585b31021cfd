// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal bootstrap errors

use crate::config::ConfigError;
use crate::coordinator::BackendError;
use crate::registry::ResolutionError;
use thiserror::Error;

/// Errors that abort start-up: no coordinator is usable after any of these
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error("{name} is not a coordinator (it is a {kind})")]
    ContractViolation { name: String, kind: &'static str },
    #[error("backend {name} failed to start: {source}")]
    Construct {
        name: String,
        #[source]
        source: BackendError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
