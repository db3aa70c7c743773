use super::shared::{finish, should_stop};
use crate::engine::{AlgorithmId, CancelToken, Engine, RunRequest, RunResult};
use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::primitives::UnionFind;
use crate::trace::{StepKind, StepPayload, StepRecorder};

/// Kruskal minimum-spanning-tree engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl Engine for Kruskal {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Kruskal
    }

    /// Start and goal are validated but otherwise ignored
    fn run(&self, graph: &Graph, request: &RunRequest, cancel: &CancelToken) -> Result<RunResult> {
        request.validate(graph)?;
        Ok(kruskal_mst(graph, cancel))
    }
}

/// Edge-sorted spanning forest.
///
/// Edges are stably sorted by weight, so ties keep `(u, v)` order. Every
/// edge is examined, even after the tree is complete, and produces one
/// `accept-edge` or `reject-edge` step with the tree built so far. A graph
/// with no edges yields a single `converged` step holding the empty forest.
#[tracing::instrument(skip(graph, cancel), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn kruskal_mst(graph: &Graph, cancel: &CancelToken) -> RunResult {
    let mut recorder = StepRecorder::new();
    let mut sets = UnionFind::new(graph.node_count());
    let mut tree: Vec<Edge> = Vec::new();
    let mut cancelled = false;

    let mut edges = graph.edges().to_vec();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    if edges.is_empty() {
        cancelled = should_stop(cancel, &recorder);
        if !cancelled {
            recorder.record(
                StepKind::Converged,
                StepPayload::ForestComplete {
                    tree: Vec::new(),
                    components: sets.components(),
                },
            );
        }
    }

    for edge in edges {
        if should_stop(cancel, &recorder) {
            cancelled = true;
            break;
        }

        let accepted = sets.union(edge.u, edge.v);
        if accepted {
            tree.push(edge);
        }
        let kind = if accepted {
            StepKind::AcceptEdge
        } else {
            StepKind::RejectEdge
        };
        recorder.record(
            kind,
            StepPayload::EdgeEvaluation {
                edge,
                accepted,
                tree: tree.clone(),
            },
        );
    }

    tracing::debug!(
        tree_edges = tree.len(),
        components = sets.components(),
        "spanning_forest"
    );
    finish(AlgorithmId::Kruskal, recorder, cancelled).with_tree(tree)
}
