//! Command implementations for all stepgraph commands

use crate::cli::{Commands, GraphArgs, RunArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{algorithms, datasets, graph, run};
use stepgraph_core::error::Result;
use tracing::debug;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Run(args) => execute_run(ctx, args),
            Commands::Algorithms => algorithms::execute(ctx.cli, &ctx.registry),
            Commands::Datasets => datasets::execute(ctx.cli, &ctx.config),
            Commands::Graph(args) => execute_graph(ctx, args),
        };
        debug!(elapsed = ?ctx.start.elapsed(), "command_finished");
        result
    }
}

fn execute_run(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    run::execute(ctx.cli, &ctx.config, &ctx.registry, args)
}

fn execute_graph(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    graph::execute(ctx.cli, &ctx.config, &args.source)
}
