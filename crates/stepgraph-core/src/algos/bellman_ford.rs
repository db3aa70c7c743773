use super::shared::{finish, goal_path, should_stop};
use crate::engine::{AlgorithmId, CancelToken, Engine, RunRequest, RunResult};
use crate::error::Result;
use crate::graph::{Graph, NodeId, Weight};
use crate::trace::{DistanceTable, ParentMap, StepKind, StepPayload, StepRecorder};

/// Bellman-Ford shortest-path engine
#[derive(Debug, Clone, Copy)]
pub struct BellmanFord {
    /// Run one extra check pass after the bounded passes
    pub detect_negative_cycles: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        BellmanFord {
            detect_negative_cycles: true,
        }
    }
}

impl Engine for BellmanFord {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::BellmanFord
    }

    fn run(&self, graph: &Graph, request: &RunRequest, cancel: &CancelToken) -> Result<RunResult> {
        request.validate(graph)?;
        Ok(bellman_ford_relax(
            graph,
            request,
            self.detect_negative_cycles,
            cancel,
        ))
    }
}

/// Cost of reaching `to` through `from`, if that beats the current estimate
fn improvement(distances: &DistanceTable, from: NodeId, to: NodeId, weight: Weight) -> Option<Weight> {
    let candidate = distances[from]? + weight;
    distances[to]
        .is_none_or(|known| candidate < known)
        .then_some(candidate)
}

/// Repeated relaxation sweeps from `request.start`.
///
/// Runs at most `max(1, n - 1)` passes over the edge list in ascending
/// `(u, v)` order, trying `u -> v` then `v -> u` for every edge. Each
/// successful relaxation emits a `relax` step; the first pass without any
/// emits a single `converged` step and ends the sweep.
///
/// Every negative edge is a negative cycle in an undirected graph (walk it
/// back and forth), so with negative weights the bounded passes end without
/// converging. When `detect_negative_cycles` is set, a final check pass
/// reports whether any edge could still relax; it records no steps.
#[tracing::instrument(skip(graph, cancel), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn bellman_ford_relax(
    graph: &Graph,
    request: &RunRequest,
    detect_negative_cycles: bool,
    cancel: &CancelToken,
) -> RunResult {
    let n = graph.node_count();
    let mut recorder = StepRecorder::new();
    let mut distances: DistanceTable = vec![None; n];
    let mut parents: ParentMap = vec![None; n];
    let mut cancelled = false;
    distances[request.start] = Some(0.0);

    let passes = n.saturating_sub(1).max(1);
    'passes: for iteration in 1..=passes {
        let mut changed = false;

        for edge in graph.edges() {
            if should_stop(cancel, &recorder) {
                cancelled = true;
                break 'passes;
            }

            for (from, to) in [(edge.u, edge.v), (edge.v, edge.u)] {
                let Some(updated) = improvement(&distances, from, to, edge.weight) else {
                    continue;
                };
                let previous = distances[to];
                distances[to] = Some(updated);
                parents[to] = Some(from);
                changed = true;
                recorder.record(
                    StepKind::Relax,
                    StepPayload::Relaxation {
                        iteration,
                        from,
                        to,
                        weight: edge.weight,
                        previous,
                        updated,
                        distances: distances.clone(),
                        parents: parents.clone(),
                    },
                );
            }
        }

        if !changed {
            tracing::debug!(iteration, "converged");
            recorder.record(
                StepKind::Converged,
                StepPayload::Convergence {
                    iteration,
                    distances: distances.clone(),
                    parents: parents.clone(),
                },
            );
            break;
        }
    }

    let negative_cycle = (detect_negative_cycles && !cancelled).then(|| {
        let detected = graph.edges().iter().any(|edge| {
            improvement(&distances, edge.u, edge.v, edge.weight).is_some()
                || improvement(&distances, edge.v, edge.u, edge.weight).is_some()
        });
        if detected {
            tracing::warn!("negative-weight cycle reachable from start; distances are not final");
        }
        detected
    });

    let path = goal_path(&parents, request);
    finish(AlgorithmId::BellmanFord, recorder, cancelled)
        .with_path(path)
        .with_distances(distances)
        .with_negative_cycle(negative_cycle)
}
