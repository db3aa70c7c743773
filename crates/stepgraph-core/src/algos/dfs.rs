use super::shared::{finish, goal_path, should_stop};
use crate::engine::{AlgorithmId, CancelToken, Engine, RunRequest, RunResult};
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::trace::{ParentMap, StepKind, StepPayload, StepRecorder, VisitedSet};

/// Depth-first traversal engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl Engine for Dfs {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Dfs
    }

    fn run(&self, graph: &Graph, request: &RunRequest, cancel: &CancelToken) -> Result<RunResult> {
        request.validate(graph)?;
        Ok(dfs_traverse(graph, request, cancel))
    }
}

/// A node on the explicit work stack and the adjacency position to resume from
struct Frame {
    node: NodeId,
    next: usize,
}

/// Mark `node` visited and record its visit
fn enter(
    recorder: &mut StepRecorder,
    visited: &mut VisitedSet,
    parents: &ParentMap,
    node: NodeId,
) {
    visited.insert(node);
    recorder.record(
        StepKind::Visit,
        StepPayload::Traversal {
            current: node,
            visited: visited.clone(),
            parents: parents.clone(),
        },
    );
}

/// Depth-first walk from `request.start` using an explicit stack.
///
/// Produces the same visit order as the recursive formulation: on entering a
/// node it is marked visited and a `visit` step is emitted, then its
/// unvisited neighbors are entered one at a time in adjacency order. Stack
/// usage is bounded by the node count, not by the host call stack.
#[tracing::instrument(skip(graph, cancel), fields(nodes = graph.node_count()))]
pub fn dfs_traverse(graph: &Graph, request: &RunRequest, cancel: &CancelToken) -> RunResult {
    let mut recorder = StepRecorder::new();
    let mut visited = VisitedSet::new();
    let mut parents: ParentMap = vec![None; graph.node_count()];
    let mut stack: Vec<Frame> = Vec::new();
    let mut cancelled = should_stop(cancel, &recorder);

    if !cancelled {
        enter(&mut recorder, &mut visited, &parents, request.start);
        stack.push(Frame {
            node: request.start,
            next: 0,
        });
    }

    while let Some(frame) = stack.last_mut() {
        if should_stop(cancel, &recorder) {
            cancelled = true;
            break;
        }

        let neighbors = graph.neighbors(frame.node);
        let unvisited = neighbors[frame.next..]
            .iter()
            .position(|(n, _)| !visited.contains(n));

        match unvisited {
            Some(offset) => {
                let position = frame.next + offset;
                frame.next = position + 1;
                let child = neighbors[position].0;
                parents[child] = Some(frame.node);
                enter(&mut recorder, &mut visited, &parents, child);
                stack.push(Frame {
                    node: child,
                    next: 0,
                });
            }
            None => {
                stack.pop();
            }
        }
    }

    let path = goal_path(&parents, request);
    finish(AlgorithmId::Dfs, recorder, cancelled).with_path(path)
}
