//! Command dispatch logic for stepgraph

use std::time::Instant;

use crate::cli::Cli;
use stepgraph_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Banner, Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        None => Banner.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
