//! `stepgraph graph` command - print the nodes and edges of a graph

use serde_json::json;
use stepgraph_core::config::EngineConfig;
use stepgraph_core::error::Result;
use stepgraph_core::graph::Graph;

use crate::cli::{Cli, GraphSourceArgs, OutputFormat};
use crate::commands::format::print_records_header;
use crate::commands::source;

/// Execute the graph command
pub fn execute(cli: &Cli, config: &EngineConfig, source: &GraphSourceArgs) -> Result<()> {
    let loaded = source::load(source, config)?;
    let graph = &loaded.graph;

    match cli.format {
        OutputFormat::Json => {
            let nodes: Vec<_> = graph
                .names()
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    json!({
                        "index": index,
                        "name": name,
                        "degree": graph.neighbors(index).len(),
                    })
                })
                .collect();
            let edges: Vec<_> = graph
                .edges()
                .iter()
                .map(|e| {
                    json!({
                        "u": e.u,
                        "v": e.v,
                        "source": graph.name_of(e.u),
                        "target": graph.name_of(e.v),
                        "weight": e.weight,
                    })
                })
                .collect();
            let output = json!({
                "graph": loaded.label,
                "nodes": nodes,
                "edges": edges,
                "total_weight": Graph::total_weight(graph.edges()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "{}: {} nodes, {} edges",
                    loaded.label,
                    graph.node_count(),
                    graph.edge_count()
                );
            }
            for (index, name) in graph.names().iter().enumerate() {
                let neighbors: Vec<String> = graph
                    .neighbors(index)
                    .iter()
                    .map(|&(n, w)| format!("{}({})", graph.name_of(n), w))
                    .collect();
                println!("{:>3} {:<6} {}", index, name, neighbors.join(" "));
            }
        }
        OutputFormat::Records => {
            let nodes = graph.node_count().to_string();
            let edges = graph.edge_count().to_string();
            print_records_header(
                "graph",
                &[
                    ("graph", loaded.label.as_str()),
                    ("nodes", nodes.as_str()),
                    ("edges", edges.as_str()),
                ],
            );
            for (index, name) in graph.names().iter().enumerate() {
                println!("N {} {} degree={}", index, name, graph.neighbors(index).len());
            }
            for edge in graph.edges() {
                println!(
                    "E {} {} {}",
                    graph.name_of(edge.u),
                    graph.name_of(edge.v),
                    edge.weight
                );
            }
        }
    }

    Ok(())
}
