//! Output formatting for the run command

pub mod human;
pub mod json;
pub mod records;

use stepgraph_core::graph::{Graph, NodeId};
use stepgraph_core::trace::{Step, StepPayload};

use crate::commands::format::format_distance;

/// One-line description of a step's payload, using node names
pub fn describe_step(graph: &Graph, step: &Step) -> String {
    let name = |node: NodeId| graph.name_of(node);
    match &step.payload {
        StepPayload::Traversal {
            current, visited, ..
        } => format!("{} visited={}", name(*current), visited.len()),
        StepPayload::Search {
            current,
            visited,
            costs,
            ..
        } => format!(
            "{} cost={} visited={}",
            name(*current),
            format_distance(costs[*current], "inf"),
            visited.len()
        ),
        StepPayload::Relaxation {
            iteration,
            from,
            to,
            weight,
            previous,
            updated,
            ..
        } => format!(
            "{}->{} w={} {}->{} pass={}",
            name(*from),
            name(*to),
            weight,
            format_distance(*previous, "inf"),
            updated,
            iteration
        ),
        StepPayload::Convergence { iteration, .. } => format!("pass={}", iteration),
        StepPayload::EdgeEvaluation { edge, tree, .. } => format!(
            "{}-{} w={} tree={}",
            name(edge.u),
            name(edge.v),
            edge.weight,
            tree.len()
        ),
        StepPayload::TreeGrowth {
            current, tree, ..
        } => format!(
            "{} tree={} weight={}",
            name(*current),
            tree.len(),
            Graph::total_weight(tree)
        ),
        StepPayload::ForestComplete { tree, components } => {
            format!("no edges tree={} components={}", tree.len(), components)
        }
    }
}
