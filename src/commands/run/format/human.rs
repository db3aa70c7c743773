//! Human-readable output for the run command

use stepgraph_core::engine::{RunRequest, RunResult};
use stepgraph_core::graph::{Graph, NodeId};

use super::describe_step;
use crate::cli::Cli;
use crate::commands::format::format_distance;
use crate::commands::source::LoadedGraph;

/// Output in human-readable format
pub fn output(
    cli: &Cli,
    loaded: &LoadedGraph,
    request: &RunRequest,
    result: &RunResult,
    summary: bool,
) {
    let graph = &loaded.graph;

    if !cli.quiet {
        let mut header = format!(
            "{} on {} ({} nodes, {} edges), start {}",
            result.algorithm,
            loaded.label,
            graph.node_count(),
            graph.edge_count(),
            graph.name_of(request.start)
        );
        if let Some(goal) = request.goal {
            header.push_str(&format!(", goal {}", graph.name_of(goal)));
        }
        println!("{}", header);
    }

    if !summary {
        for step in &result.steps {
            println!("#{} {} {}", step.index, step.kind, describe_step(graph, step));
        }
    }

    output_artifacts(graph, result);

    if result.is_cancelled() {
        println!("cancelled after {} steps", result.steps.len());
    } else if !cli.quiet {
        println!("{} steps", result.steps.len());
    }
}

fn output_artifacts(graph: &Graph, result: &RunResult) {
    if let Some(path) = &result.path {
        if path.is_empty() {
            println!("path: unreachable");
        } else {
            let cost = result
                .path_cost(graph)
                .map(|c| format!(" (cost {})", c))
                .unwrap_or_default();
            println!("path: {}{}", join_names(graph, path, " -> "), cost);
        }
    }

    if let Some(distances) = &result.distances {
        let entries: Vec<String> = distances
            .iter()
            .enumerate()
            .map(|(node, d)| format!("{}={}", graph.name_of(node), format_distance(*d, "inf")))
            .collect();
        println!("distances: {}", entries.join(" "));
    }

    if let Some(tree) = &result.tree {
        let edges: Vec<String> = tree
            .iter()
            .map(|e| format!("{}-{}({})", graph.name_of(e.u), graph.name_of(e.v), e.weight))
            .collect();
        println!(
            "tree: {} (weight {})",
            if edges.is_empty() {
                "empty".to_string()
            } else {
                edges.join(" ")
            },
            Graph::total_weight(tree)
        );
    }

    if let Some(detected) = result.negative_cycle {
        println!("negative cycle: {}", if detected { "yes" } else { "no" });
    }
}

fn join_names(graph: &Graph, nodes: &[NodeId], separator: &str) -> String {
    nodes
        .iter()
        .map(|&n| graph.name_of(n))
        .collect::<Vec<_>>()
        .join(separator)
}
