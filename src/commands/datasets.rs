//! `stepgraph datasets` command - list bundled sample graphs

use serde::Serialize;
use stepgraph_core::config::EngineConfig;
use stepgraph_core::error::Result;
use stepgraph_core::graph::datasets;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{escape_quotes, print_records_header};

#[derive(Serialize)]
struct DatasetEntry {
    key: &'static str,
    title: &'static str,
    nodes: usize,
    edges: usize,
    default: bool,
}

/// Execute the datasets command
pub fn execute(cli: &Cli, config: &EngineConfig) -> Result<()> {
    let entries = datasets::list()
        .iter()
        .map(|dataset| -> Result<DatasetEntry> {
            let graph = dataset.build()?;
            Ok(DatasetEntry {
                key: dataset.key,
                title: dataset.title,
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                default: dataset.key == config.run.dataset,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            for entry in &entries {
                println!(
                    "{:<10} {} ({} nodes, {} edges){}",
                    entry.key,
                    entry.title,
                    entry.nodes,
                    entry.edges,
                    if entry.default { " [default]" } else { "" }
                );
            }
        }
        OutputFormat::Records => {
            let count = entries.len().to_string();
            print_records_header("datasets", &[("count", count.as_str())]);
            for entry in &entries {
                println!(
                    "G {} \"{}\" nodes={} edges={} default={}",
                    entry.key,
                    escape_quotes(entry.title),
                    entry.nodes,
                    entry.edges,
                    entry.default
                );
            }
        }
    }

    Ok(())
}
