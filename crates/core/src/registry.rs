// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of coordination backends
//!
//! Backends are addressed by a dotted name, `<module>.<Type>`. Each module
//! exports named items; an item is either a coordinator factory or some
//! other kind of export that cannot be used as a backend.

use crate::coordinator::{
    BackendError, Coordinator, SerialCoordinator, SimpleCoordinator,
};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Module holding the built-in backends; used when a name has no module
pub const DEFAULT_MODULE: &str = "coordinator";

/// Backend used when no class is configured
pub const DEFAULT_CLASS: &str = "coordinator.SimpleCoordinator";

/// Builds a backend from the peer-relation name
pub type CoordinatorFactory =
    Arc<dyn Fn(&str) -> Result<Arc<dyn Coordinator>, BackendError> + Send + Sync>;

/// Errors resolving a backend name to an export
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("unknown backend module {module} (resolving {name})")]
    UnknownModule { module: String, name: String },
    #[error("module {module} has no export named {export} (resolving {name})")]
    UnknownExport {
        module: String,
        export: String,
        name: String,
    },
}

/// An item exported by a backend module
#[derive(Clone)]
pub enum Export {
    /// Satisfies the coordinator contract
    Coordinator(CoordinatorFactory),
    /// Anything else; `kind` describes it for diagnostics
    Other { kind: &'static str },
}

impl fmt::Debug for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Export::Coordinator(_) => f.write_str("Coordinator(..)"),
            Export::Other { kind } => f.debug_struct("Other").field("kind", kind).finish(),
        }
    }
}

/// Split a dotted name on its last separator into `(module, export)`.
///
/// A name without a separator has an empty module.
pub fn split_name(full_name: &str) -> (&str, &str) {
    full_name.rsplit_once('.').unwrap_or(("", full_name))
}

/// Name -> export table for every known backend module
#[derive(Clone, Debug, Default)]
pub struct BackendRegistry {
    modules: BTreeMap<String, BTreeMap<String, Export>>,
}

impl BackendRegistry {
    /// Registry without any modules
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `coordinator` module.
    ///
    /// With a state directory the built-in backends keep their lock book
    /// in `<state_dir>/<relation>.json`; without one they run in memory.
    pub fn builtin(state_dir: Option<PathBuf>) -> Self {
        let mut registry = Self::new();

        let dir = state_dir.clone();
        registry.register_coordinator(DEFAULT_MODULE, "SimpleCoordinator", move |relation| {
            match &dir {
                Some(dir) => SimpleCoordinator::open(relation, dir),
                None => Ok(SimpleCoordinator::new(relation)),
            }
        });

        let dir = state_dir;
        registry.register_coordinator(DEFAULT_MODULE, "SerialCoordinator", move |relation| {
            match &dir {
                Some(dir) => SerialCoordinator::open(relation, dir),
                None => Ok(SerialCoordinator::new(relation)),
            }
        });

        registry.register_other(DEFAULT_MODULE, "LockBook", "data type");
        registry
    }

    /// Export a coordinator factory as `<module>.<name>`
    pub fn register_coordinator<F, C>(&mut self, module: &str, name: &str, factory: F)
    where
        F: Fn(&str) -> Result<C, BackendError> + Send + Sync + 'static,
        C: Coordinator,
    {
        let factory: CoordinatorFactory = Arc::new(move |relation: &str| {
            factory(relation).map(|c| Arc::new(c) as Arc<dyn Coordinator>)
        });
        self.insert(module, name, Export::Coordinator(factory));
    }

    /// Export a non-coordinator item as `<module>.<name>`
    pub fn register_other(&mut self, module: &str, name: &str, kind: &'static str) {
        self.insert(module, name, Export::Other { kind });
    }

    fn insert(&mut self, module: &str, name: &str, export: Export) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(name.to_string(), export);
    }

    /// Look up `export` in `module`
    pub fn lookup(&self, module: &str, export: &str) -> Result<&Export, ResolutionError> {
        let exports = self
            .modules
            .get(module)
            .ok_or_else(|| ResolutionError::UnknownModule {
                module: module.to_string(),
                name: format!("{module}.{export}"),
            })?;
        exports
            .get(export)
            .ok_or_else(|| ResolutionError::UnknownExport {
                module: module.to_string(),
                export: export.to_string(),
                name: format!("{module}.{export}"),
            })
    }

    /// Fully qualified names of every registered coordinator
    pub fn classes(&self) -> Vec<String> {
        self.modules
            .iter()
            .flat_map(|(module, exports)| {
                exports
                    .iter()
                    .filter(|(_, export)| matches!(export, Export::Coordinator(_)))
                    .map(move |(name, _)| format!("{module}.{name}"))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
