//! JSON output for the run command

use serde_json::json;
use stepgraph_core::engine::RunResult;
use stepgraph_core::error::Result;

use crate::commands::source::LoadedGraph;

/// Output the run result as one JSON document.
///
/// The serialized `RunResult` is extended with the graph label, node names,
/// step count and derived totals. `summary` drops the `steps` array.
pub fn output(loaded: &LoadedGraph, result: &RunResult, summary: bool) -> Result<()> {
    let graph = &loaded.graph;
    let mut output = serde_json::to_value(result)?;

    if let Some(obj) = output.as_object_mut() {
        obj.insert("graph".to_string(), json!(loaded.label));
        obj.insert("nodes".to_string(), json!(graph.names()));
        obj.insert("step_count".to_string(), json!(result.steps.len()));
        if let Some(cost) = result.path_cost(graph) {
            obj.insert("path_cost".to_string(), json!(cost));
        }
        if let Some(weight) = result.tree_weight() {
            obj.insert("tree_weight".to_string(), json!(weight));
        }
        if summary {
            obj.remove("steps");
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
