use super::shared::{finish, goal_path, should_stop};
use crate::engine::{AlgorithmId, CancelToken, Engine, RunRequest, RunResult};
use crate::error::Result;
use crate::graph::Graph;
use crate::primitives::MinFrontier;
use crate::trace::{DistanceTable, ParentMap, StepKind, StepPayload, StepRecorder, VisitedSet};

/// Dijkstra shortest-path engine.
///
/// Assumes non-negative weights; negative-weight graphs belong to Bellman-Ford.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    /// Stop as soon as the goal is finalized
    pub stop_at_goal: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Dijkstra { stop_at_goal: true }
    }
}

impl Engine for Dijkstra {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Dijkstra
    }

    fn run(&self, graph: &Graph, request: &RunRequest, cancel: &CancelToken) -> Result<RunResult> {
        request.validate(graph)?;
        Ok(dijkstra_search(graph, request, self.stop_at_goal, cancel))
    }
}

/// Lazy-deletion Dijkstra from `request.start`.
///
/// Stale frontier entries are discarded when popped. Each finalized node
/// emits a `visit` step carrying the distance table and parent map as they
/// stand before its neighbors are relaxed.
#[tracing::instrument(skip(graph, cancel), fields(nodes = graph.node_count()))]
pub fn dijkstra_search(
    graph: &Graph,
    request: &RunRequest,
    stop_at_goal: bool,
    cancel: &CancelToken,
) -> RunResult {
    let n = graph.node_count();
    let mut recorder = StepRecorder::new();
    let mut distances: DistanceTable = vec![None; n];
    let mut parents: ParentMap = vec![None; n];
    let mut visited = VisitedSet::new();
    let mut frontier = MinFrontier::seeded(0.0, request.start);
    let mut cancelled = false;
    distances[request.start] = Some(0.0);

    while let Some(entry) = frontier.pop() {
        if should_stop(cancel, &recorder) {
            cancelled = true;
            break;
        }

        let current = entry.node;
        if !visited.insert(current) {
            continue;
        }

        recorder.record(
            StepKind::Visit,
            StepPayload::Search {
                current,
                visited: visited.clone(),
                costs: distances.clone(),
                parents: parents.clone(),
            },
        );

        if stop_at_goal && request.goal == Some(current) {
            break;
        }

        let Some(base) = distances[current] else {
            continue;
        };
        for &(neighbor, weight) in graph.neighbors(current) {
            let candidate = base + weight;
            if distances[neighbor].is_none_or(|d| candidate < d) {
                distances[neighbor] = Some(candidate);
                parents[neighbor] = Some(current);
                frontier.push(candidate, neighbor);
            }
        }
    }

    let path = goal_path(&parents, request);
    finish(AlgorithmId::Dijkstra, recorder, cancelled)
        .with_path(path)
        .with_distances(distances)
}

#[cfg(test)]
mod tests;
