// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! coordctl - coordinator layer host CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod adapters;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{flags, hook, locks};
use std::path::PathBuf;

use crate::adapters::Context;
use crate::error::CliError;

#[derive(Parser)]
#[command(
    name = "coordctl",
    version,
    about = "Coordinator layer - lock grants and requests as host flags"
)]
struct Cli {
    /// State directory holding flags and lock books
    #[arg(long, global = true, default_value = ".coord")]
    state_dir: PathBuf,

    /// Layer options file [default: <state-dir>/layer.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Local member name [default: $COORD_LOCAL_MEMBER]
    #[arg(long, global = true)]
    member: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one host invocation: bootstrap and start hooks
    Hook(hook::HookArgs),
    /// List set flags
    Flags(flags::FlagsArgs),
    /// Request a lock for the local member
    Request(locks::LockArgs),
    /// Release a lock held or requested by the local member
    Release(locks::LockArgs),
    /// Show grants and requests of every member
    Locks,
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();
    let ctx = Context::new(cli.state_dir, cli.config, cli.member);

    let result = match cli.command {
        Commands::Hook(args) => hook::hook(&ctx, args),
        Commands::Flags(args) => flags::flags(&ctx, args),
        Commands::Request(args) => locks::request(&ctx, args),
        Commands::Release(args) => locks::release(&ctx, args),
        Commands::Locks => locks::show(&ctx),
    };

    // Friendly errors carry their own formatting
    if let Err(err) = &result {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            eprint!("{}", cli_err);
            std::process::exit(1);
        }
    }
    result
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("COORD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
