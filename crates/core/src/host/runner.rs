// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Start-up hook runner

use super::{HookError, StartHook, StartupScheduler};
use std::sync::{Arc, Mutex};

/// Holds start hooks and runs them when an invocation begins
#[derive(Clone, Default)]
pub struct HookRunner {
    hooks: Arc<Mutex<Vec<(String, StartHook)>>>,
}

impl HookRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of registered hooks, in registration order
    pub fn names(&self) -> Vec<String> {
        self.hooks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Run every hook in registration order, stopping at the first failure
    pub fn run_start(&self) -> Result<(), HookError> {
        let mut hooks = self.hooks.lock().unwrap_or_else(|e| e.into_inner());
        for (name, hook) in hooks.iter_mut() {
            tracing::debug!(hook = %name, "running start hook");
            if let Err(e) = hook() {
                tracing::error!(hook = %name, error = %e, "start hook failed");
                return Err(e);
            }
        }
        Ok(())
    }
}

impl StartupScheduler for HookRunner {
    fn at_start(&self, name: &str, hook: StartHook) {
        tracing::debug!(hook = name, "start hook registered");
        self.hooks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((name.to_string(), hook));
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
