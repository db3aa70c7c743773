use super::shared::{finish, goal_path, should_stop};
use crate::engine::{AlgorithmId, CancelToken, Engine, RunRequest, RunResult};
use crate::error::Result;
use crate::graph::Graph;
use crate::trace::{ParentMap, StepKind, StepPayload, StepRecorder, VisitedSet};
use std::collections::VecDeque;

/// Breadth-first traversal engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Engine for Bfs {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Bfs
    }

    fn run(&self, graph: &Graph, request: &RunRequest, cancel: &CancelToken) -> Result<RunResult> {
        request.validate(graph)?;
        Ok(bfs_traverse(graph, request, cancel))
    }
}

/// Level-order traversal from `request.start`.
///
/// Emits one `visit` step per node dequeued for the first time. A neighbor
/// gets its parent the first time it is discovered and is enqueued once;
/// nodes outside the start's component are never reached. Weights are
/// ignored.
#[tracing::instrument(skip(graph, cancel), fields(nodes = graph.node_count()))]
pub fn bfs_traverse(graph: &Graph, request: &RunRequest, cancel: &CancelToken) -> RunResult {
    let start = request.start;
    let mut recorder = StepRecorder::new();
    let mut visited = VisitedSet::new();
    let mut parents: ParentMap = vec![None; graph.node_count()];
    let mut queue = VecDeque::from([start]);
    let mut cancelled = false;

    while let Some(current) = queue.pop_front() {
        if should_stop(cancel, &recorder) {
            cancelled = true;
            break;
        }

        // Duplicates in the queue are discarded here
        if !visited.insert(current) {
            continue;
        }

        recorder.record(
            StepKind::Visit,
            StepPayload::Traversal {
                current,
                visited: visited.clone(),
                parents: parents.clone(),
            },
        );

        for &(neighbor, _) in graph.neighbors(current) {
            if visited.contains(&neighbor) || neighbor == start || parents[neighbor].is_some() {
                continue;
            }
            parents[neighbor] = Some(current);
            queue.push_back(neighbor);
        }
    }

    let path = goal_path(&parents, request);
    finish(AlgorithmId::Bfs, recorder, cancelled).with_path(path)
}
