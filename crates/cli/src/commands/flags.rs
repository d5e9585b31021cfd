// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `coordctl flags` - list set flags

use crate::adapters::Context;
use crate::output::{print_list, OutputFormat};
use anyhow::Result;
use clap::Args;
use coord_core::FlagBus;

#[derive(Args)]
pub struct FlagsArgs {
    /// Only flags starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn flags(ctx: &Context, args: FlagsArgs) -> Result<()> {
    let bus = ctx.flag_bus();
    let flags = match &args.prefix {
        Some(prefix) => bus.list_prefixed(prefix)?,
        None => bus.list_set()?,
    };
    let flags: Vec<String> = flags.into_iter().collect();
    print_list(&flags, args.format)?;
    Ok(())
}
