// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use coord_core::{BackendRegistry, BootstrapError, ResolutionError, COORDINATOR_LAYER};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Error for a fatal bootstrap failure, listing the usable backends
    pub fn bootstrap(err: BootstrapError, registry: &BackendRegistry) -> Self {
        let known = registry.classes().join(", ");
        let error = match &err {
            BootstrapError::Resolution(ResolutionError::UnknownModule { name, .. })
            | BootstrapError::Resolution(ResolutionError::UnknownExport { name, .. }) => {
                CliError::new(format!("Unknown coordinator backend '{}'", name))
                    .with_context(format!("Registered backends: {}", known))
                    .with_suggestion(format!(
                        "Set [{}] class to one of the registered backends",
                        COORDINATOR_LAYER
                    ))
            }
            BootstrapError::ContractViolation { name, kind } => {
                CliError::new(format!("'{}' is not a coordinator backend", name))
                    .with_context(format!("It is a {}", kind))
                    .with_context(format!("Registered backends: {}", known))
                    .with_suggestion(format!(
                        "Set [{}] class to one of the registered backends",
                        COORDINATOR_LAYER
                    ))
            }
            BootstrapError::Construct { name, source } => {
                CliError::new(format!("Coordinator backend '{}' failed to start", name))
                    .with_context(source.to_string())
                    .with_suggestion("Inspect the lock book: coordctl locks")
            }
            BootstrapError::Config(source) => CliError::new("Invalid layer options")
                .with_context(source.to_string())
                .with_suggestion("Check the file passed with --config"),
        };
        error.with_source(err)
    }

    /// Error for when the local member cannot be determined
    pub fn unknown_member() -> Self {
        CliError::new("Local member is unknown")
            .with_suggestion("Pass --member <name>")
            .with_suggestion("Set COORD_LOCAL_MEMBER")
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
