// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `coordctl hook` - run one host invocation

use crate::adapters::Context;
use crate::error::CliError;
use crate::output::{print_list, OutputFormat};
use anyhow::Result;
use clap::Args;
use coord_core::{
    BackendRegistry, Bootstrap, BootstrapError, FlagBus, HookError, HookRunner, LayerOptions,
    ReconcileError,
};

/// Flags owned by the coordinator layer
const GOVERNED_PREFIX: &str = "coordinator.";

#[derive(Args)]
pub struct HookArgs {
    /// Enter the bootstrap path this many times, as a host that
    /// initializes the layer repeatedly would
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub entries: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Bootstrap the layer, run start hooks, print the coordinator flags
pub fn hook(ctx: &Context, args: HookArgs) -> Result<()> {
    let registry = BackendRegistry::builtin(Some(ctx.state_dir().to_path_buf()));
    let options = LayerOptions::load(&ctx.config_path())
        .and_then(|layers| layers.coordinator())
        .map_err(|e| CliError::bootstrap(BootstrapError::Config(e), &registry))?;
    let runner = HookRunner::new();
    let bus = ctx.flag_bus();

    let bootstrap = Bootstrap::new(&registry);
    for _ in 0..args.entries {
        bootstrap
            .run(&options, &runner, bus.clone(), ctx.identity())
            .map_err(|e| CliError::bootstrap(e, &registry))?;
    }
    tracing::info!(hooks = ?runner.names(), "start hooks registered");

    runner.run_start().map_err(|e| match e {
        HookError::Reconcile(ReconcileError::Identity(source)) => {
            anyhow::Error::new(CliError::unknown_member().with_source(source))
        }
        other => anyhow::Error::new(other),
    })?;

    let flags: Vec<String> = bus.list_prefixed(GOVERNED_PREFIX)?.into_iter().collect();
    print_list(&flags, args.format)?;
    Ok(())
}
