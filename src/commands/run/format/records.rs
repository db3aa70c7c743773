//! Records output for the run command
//!
//! ```text
//! H stepgraph=1 records=1 mode=run algorithm=dijkstra graph=sample-7 ...
//! S <index> <kind> <description>
//! P <node> <node> ... cost=<total>
//! D <node> <distance>
//! T <node> <node> <weight>
//! C negative_cycle=<bool>
//! ```

use stepgraph_core::engine::{RunRequest, RunResult};

use super::describe_step;
use crate::commands::format::{format_distance, print_records_header};
use crate::commands::source::LoadedGraph;

/// Output in records format
pub fn output(loaded: &LoadedGraph, request: &RunRequest, result: &RunResult, summary: bool) {
    let graph = &loaded.graph;
    let algorithm = result.algorithm.to_string();
    let nodes = graph.node_count().to_string();
    let edges = graph.edge_count().to_string();
    let start = graph.name_of(request.start);
    let goal = request.goal.map(|g| graph.name_of(g)).unwrap_or("-");
    let outcome = if result.is_cancelled() {
        "cancelled"
    } else {
        "complete"
    };
    let steps = result.steps.len().to_string();

    print_records_header(
        "run",
        &[
            ("algorithm", algorithm.as_str()),
            ("graph", loaded.label.as_str()),
            ("nodes", nodes.as_str()),
            ("edges", edges.as_str()),
            ("start", start),
            ("goal", goal),
            ("outcome", outcome),
            ("steps", steps.as_str()),
        ],
    );

    if !summary {
        for step in &result.steps {
            println!("S {} {} {}", step.index, step.kind, describe_step(graph, step));
        }
    }

    if let Some(path) = &result.path {
        let names: Vec<&str> = path.iter().map(|&n| graph.name_of(n)).collect();
        let cost = format_distance(result.path_cost(graph), "-");
        if names.is_empty() {
            println!("P - cost=-");
        } else {
            println!("P {} cost={}", names.join(" "), cost);
        }
    }

    if let Some(distances) = &result.distances {
        for (node, distance) in distances.iter().enumerate() {
            println!("D {} {}", graph.name_of(node), format_distance(*distance, "-"));
        }
    }

    if let Some(tree) = &result.tree {
        for edge in tree {
            println!(
                "T {} {} {}",
                graph.name_of(edge.u),
                graph.name_of(edge.v),
                edge.weight
            );
        }
    }

    if let Some(detected) = result.negative_cycle {
        println!("C negative_cycle={}", detected);
    }
}
