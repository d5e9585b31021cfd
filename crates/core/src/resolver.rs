// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend resolution: configured name -> constructed coordinator

use crate::config::CoordinatorOptions;
use crate::coordinator::Coordinator;
use crate::error::BootstrapError;
use crate::registry::{split_name, BackendRegistry, Export, DEFAULT_CLASS, DEFAULT_MODULE};
use std::sync::Arc;

/// Backend name to use for the given options
pub fn class_name(options: &CoordinatorOptions) -> &str {
    options.class().unwrap_or(DEFAULT_CLASS)
}

/// Resolve the configured backend and construct it for `relation`.
///
/// Construction runs the backend's own start-up side effects.
pub fn instantiate(
    registry: &BackendRegistry,
    options: &CoordinatorOptions,
    relation: &str,
) -> Result<Arc<dyn Coordinator>, BootstrapError> {
    let full_name = class_name(options);
    let (module, export) = split_name(full_name);
    let module = if module.is_empty() {
        DEFAULT_MODULE
    } else {
        module
    };

    let factory = match registry.lookup(module, export)? {
        Export::Coordinator(factory) => factory,
        Export::Other { kind } => {
            return Err(BootstrapError::ContractViolation {
                name: full_name.to_string(),
                kind,
            })
        }
    };

    let coordinator = factory(relation).map_err(|source| BootstrapError::Construct {
        name: full_name.to_string(),
        source,
    })?;
    tracing::info!(class = full_name, relation, "coordination backend constructed");
    Ok(coordinator)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
