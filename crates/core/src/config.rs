// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Layer options
//!
//! Options live in a TOML file with one table per layer:
//!
//! ```toml
//! [coordinator]
//! class = "coordinator.SerialCoordinator"
//! ```

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Layer name the coordinator reads its options from
pub const COORDINATOR_LAYER: &str = "coordinator";

/// Errors loading layer options
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid options for layer {layer}: {source}")]
    Layer {
        layer: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Options of every layer, keyed by layer name
#[derive(Debug, Clone, Default)]
pub struct LayerOptions {
    layers: toml::Table,
}

impl LayerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML source
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        Ok(Self {
            layers: toml::from_str(source)?,
        })
    }

    /// Load options from a file. A missing file yields empty options.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&source).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Raw option table of a layer; empty when the layer has none
    pub fn options(&self, layer: &str) -> toml::Table {
        match self.layers.get(layer) {
            Some(toml::Value::Table(table)) => table.clone(),
            _ => toml::Table::new(),
        }
    }

    /// Typed options of the coordinator layer
    pub fn coordinator(&self) -> Result<CoordinatorOptions, ConfigError> {
        toml::Value::Table(self.options(COORDINATOR_LAYER))
            .try_into::<CoordinatorOptions>()
            .map_err(|source| ConfigError::Layer {
                layer: COORDINATOR_LAYER.to_string(),
                source,
            })
    }
}

/// Options of the coordinator layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CoordinatorOptions {
    /// Fully qualified backend name, `<module>.<Type>`
    #[serde(default)]
    pub class: Option<String>,
}

impl CoordinatorOptions {
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
        }
    }

    /// Configured backend name, if any
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
