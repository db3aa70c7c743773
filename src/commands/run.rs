//! `stepgraph run` command - run one algorithm and print its trace
//!
//! The start defaults to `[run] start` and then node 0; the goal defaults to
//! `[run] goal`. Ctrl-C stops the run cooperatively and the partial trace is
//! still printed.

mod format;

use stepgraph_core::config::EngineConfig;
use stepgraph_core::engine::{CancelToken, RunRequest};
use stepgraph_core::error::Result;
use stepgraph_core::graph::{Graph, NodeId};
use stepgraph_core::registry::Registry;

use crate::cli::{Cli, OutputFormat, RunArgs};
use crate::commands::source;

/// Execute the run command
pub fn execute(cli: &Cli, config: &EngineConfig, registry: &Registry, args: &RunArgs) -> Result<()> {
    let name = match &args.algorithm {
        Some(name) => name.clone(),
        None => config.run.algorithm.to_string(),
    };
    // Fail on unknown or unavailable engines before touching the graph
    registry.lookup(&name)?;

    let loaded = source::load(&args.source, config)?;
    let request = build_request(
        &loaded.graph,
        args.start.as_deref().or(config.run.start.as_deref()),
        args.goal.as_deref().or(config.run.goal.as_deref()),
    )?;

    let cancel = CancelToken::new();
    install_interrupt_handler(&cancel);

    let result = registry.run(&name, &loaded.graph, &request, &cancel)?;
    if result.is_cancelled() {
        tracing::warn!(steps = result.steps.len(), "run interrupted; trace is partial");
    }

    match cli.format {
        OutputFormat::Human => format::human::output(cli, &loaded, &request, &result, args.summary),
        OutputFormat::Json => format::json::output(&loaded, &result, args.summary)?,
        OutputFormat::Records => {
            format::records::output(&loaded, &request, &result, args.summary)
        }
    }

    Ok(())
}

fn build_request(graph: &Graph, start: Option<&str>, goal: Option<&str>) -> Result<RunRequest> {
    let start: NodeId = match start {
        Some(text) => graph.resolve_node("start", text)?,
        None => 0,
    };
    let goal = goal
        .map(|text| graph.resolve_node("goal", text))
        .transpose()?;
    Ok(RunRequest { start, goal })
}

fn install_interrupt_handler(cancel: &CancelToken) {
    let cancel = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        tracing::debug!(error = %e, "interrupt handler not installed");
    }
}
