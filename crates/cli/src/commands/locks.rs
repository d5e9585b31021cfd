// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `coordctl request|release <lock>` and `coordctl locks`
//!
//! These edit the lock book directly. Grants are decided by the backend
//! the next time it starts (`coordctl hook`).

use crate::adapters::Context;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use coord_core::{LocalIdentity, LockBook};

#[derive(Args)]
pub struct LockArgs {
    /// Lock name
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub lock: String,
}

pub fn request(ctx: &Context, args: LockArgs) -> Result<()> {
    let member = ctx
        .identity()
        .local_member()
        .map_err(|e| CliError::unknown_member().with_source(e))?;
    let path = ctx.book_path();
    let mut book = LockBook::load(&path)?;

    if book.request(&member, &args.lock) {
        book.save(&path)?;
        println!("Requested: {}", args.lock);
    } else {
        println!("Already requested: {}", args.lock);
    }
    Ok(())
}

pub fn release(ctx: &Context, args: LockArgs) -> Result<()> {
    let member = ctx
        .identity()
        .local_member()
        .map_err(|e| CliError::unknown_member().with_source(e))?;
    let path = ctx.book_path();
    let mut book = LockBook::load(&path)?;

    if book.release(&member, &args.lock) {
        book.save(&path)?;
        println!("Released: {}", args.lock);
    } else {
        println!("Not held or requested: {}", args.lock);
    }
    Ok(())
}

pub fn show(ctx: &Context) -> Result<()> {
    let book = LockBook::load(&ctx.book_path())?;
    println!("{}", serde_json::to_string_pretty(&book)?);
    Ok(())
}
