//! `stepgraph algorithms` command - list engines and their availability

use serde::Serialize;
use stepgraph_core::engine::AlgorithmId;
use stepgraph_core::error::Result;
use stepgraph_core::registry::{Availability, Registry};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{escape_quotes, print_records_header};

#[derive(Serialize)]
struct AlgorithmEntry<'a> {
    id: AlgorithmId,
    title: &'a str,
    requires_goal: bool,
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

fn entries(availability: &[(AlgorithmId, Availability)]) -> Vec<AlgorithmEntry<'_>> {
    availability
        .iter()
        .map(|(id, status)| AlgorithmEntry {
            id: *id,
            title: id.title(),
            requires_goal: id.requires_goal(),
            available: status.is_available(),
            reason: match status {
                Availability::Available => None,
                Availability::Unavailable { reason } => Some(reason.as_str()),
            },
        })
        .collect()
}

/// Execute the algorithms command
pub fn execute(cli: &Cli, registry: &Registry) -> Result<()> {
    let availability = registry.availability();
    let entries = entries(&availability);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            for entry in &entries {
                let status = if entry.available {
                    "available"
                } else {
                    "unavailable"
                };
                let mut line = format!("{:<13} {:<12} {}", entry.id.as_str(), status, entry.title);
                if entry.requires_goal {
                    line.push_str(" [needs --goal]");
                }
                if let Some(reason) = entry.reason {
                    line.push_str(&format!(" ({})", reason));
                }
                println!("{}", line);
            }
        }
        OutputFormat::Records => {
            let count = entries.len().to_string();
            print_records_header("algorithms", &[("count", count.as_str())]);
            for entry in &entries {
                let status = if entry.available {
                    "available"
                } else {
                    "unavailable"
                };
                let mut line = format!(
                    "A {} {} \"{}\" goal={}",
                    entry.id,
                    status,
                    escape_quotes(entry.title),
                    entry.requires_goal
                );
                if let Some(reason) = entry.reason {
                    line.push_str(&format!(" reason=\"{}\"", escape_quotes(reason)));
                }
                println!("{}", line);
            }
        }
    }

    Ok(())
}
