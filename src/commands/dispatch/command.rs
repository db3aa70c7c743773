//! Per-invocation state handed to every subcommand

use std::time::Instant;

use crate::cli::Cli;
use stepgraph_core::config::EngineConfig;
use stepgraph_core::error::Result;
use stepgraph_core::registry::Registry;

/// Parsed flags, the resolved configuration and the engines it enables
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub registry: Registry,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Load the file named by `--config` (or the discovered one) and build
    /// the registry from it
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = EngineConfig::discover(cli.config.as_deref())?;
        let registry = Registry::from_config(&config);
        Ok(Self {
            cli,
            config,
            registry,
            start,
        })
    }
}

pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Bare `stepgraph`: print the version and a pointer to `--help`
pub struct Banner;

impl Command for Banner {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!(
            "stepgraph {}: step-by-step traces of classic graph algorithms",
            env!("CARGO_PKG_VERSION")
        );
        println!("Try `stepgraph algorithms` or `stepgraph --help`.");
        Ok(())
    }
}
