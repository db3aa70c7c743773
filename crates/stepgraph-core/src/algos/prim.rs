use super::shared::{finish, should_stop};
use crate::engine::{AlgorithmId, CancelToken, Engine, RunRequest, RunResult};
use crate::error::Result;
use crate::graph::{Edge, Graph, NodeId, Weight};
use crate::primitives::MinFrontier;
use crate::trace::{StepKind, StepPayload, StepRecorder, VisitedSet};

/// Prim minimum-spanning-tree engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl Engine for Prim {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Prim
    }

    fn run(&self, graph: &Graph, request: &RunRequest, cancel: &CancelToken) -> Result<RunResult> {
        request.validate(graph)?;
        Ok(prim_mst(graph, request.start, cancel))
    }
}

/// Grow a spanning tree of `start`'s component.
///
/// The frontier holds `(edge weight, node)` entries with lazy deletion. A
/// neighbor's candidate parent is replaced only by a strictly cheaper
/// connecting edge, so the parent in effect at its first successful pop is
/// the one whose weight it was popped with.
#[tracing::instrument(skip(graph, cancel), fields(nodes = graph.node_count()))]
pub fn prim_mst(graph: &Graph, start: NodeId, cancel: &CancelToken) -> RunResult {
    let n = graph.node_count();
    let mut recorder = StepRecorder::new();
    let mut visited = VisitedSet::new();
    let mut candidate: Vec<Option<(NodeId, Weight)>> = vec![None; n];
    let mut tree: Vec<Edge> = Vec::new();
    let mut frontier = MinFrontier::seeded(0.0, start);
    let mut cancelled = false;

    while let Some(entry) = frontier.pop() {
        if should_stop(cancel, &recorder) {
            cancelled = true;
            break;
        }

        let current = entry.node;
        if !visited.insert(current) {
            continue;
        }

        if let Some((parent, weight)) = candidate[current] {
            tree.push(Edge::new(parent, current, weight));
        }

        recorder.record(
            StepKind::Visit,
            StepPayload::TreeGrowth {
                current,
                visited: visited.clone(),
                tree: tree.clone(),
            },
        );

        for &(neighbor, weight) in graph.neighbors(current) {
            if visited.contains(&neighbor) {
                continue;
            }
            if candidate[neighbor].is_none_or(|(_, best)| weight < best) {
                candidate[neighbor] = Some((current, weight));
                frontier.push(weight, neighbor);
            }
        }
    }

    finish(AlgorithmId::Prim, recorder, cancelled).with_tree(tree)
}
