//! A* over synthetic grid coordinates.
//!
//! Node `i` sits at `(i mod w, i div w)` with `w = ceil(sqrt(n))` unless a
//! width is configured, and the heuristic is the Euclidean distance between
//! those points. The coordinates have nothing to do with edge weights, so the
//! heuristic is not admissible in general: paths are valid but not
//! guaranteed optimal.

use super::shared::{finish, goal_path, should_stop};
use crate::bail_invalid;
use crate::engine::{AlgorithmId, CancelToken, Engine, RunRequest, RunResult};
use crate::error::{Result, StepGraphError};
use crate::graph::{Graph, NodeId, Weight};
use crate::primitives::MinFrontier;
use crate::trace::{DistanceTable, ParentMap, StepKind, StepPayload, StepRecorder, VisitedSet};

/// A* search engine
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {
    grid_width: Option<usize>,
}

impl AStar {
    /// Engine with an optional fixed grid width; a zero width is rejected
    pub fn new(grid_width: Option<usize>) -> Result<Self> {
        if grid_width == Some(0) {
            bail_invalid!("astar grid width", 0);
        }
        Ok(AStar { grid_width })
    }

    pub fn grid_width(&self) -> Option<usize> {
        self.grid_width
    }
}

impl Engine for AStar {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Astar
    }

    fn run(&self, graph: &Graph, request: &RunRequest, cancel: &CancelToken) -> Result<RunResult> {
        request.validate(graph)?;
        let goal = request.goal.ok_or_else(|| StepGraphError::MissingGoal {
            algorithm: self.id().to_string(),
        })?;
        let coords = grid_coordinates(graph.node_count(), self.grid_width);
        Ok(astar_search(graph, request.start, goal, &coords, cancel))
    }
}

/// Grid position of every node
pub fn grid_coordinates(n: usize, width: Option<usize>) -> Vec<(Weight, Weight)> {
    let width = width.unwrap_or_else(|| (n as f64).sqrt().ceil() as usize).max(1);
    (0..n)
        .map(|i| ((i % width) as Weight, (i / width) as Weight))
        .collect()
}

fn heuristic(coords: &[(Weight, Weight)], a: NodeId, b: NodeId) -> Weight {
    let (ax, ay) = coords[a];
    let (bx, by) = coords[b];
    (bx - ax).hypot(by - ay)
}

/// Best-first search ordered by `g + h`.
///
/// `costs` in each `visit` step is the table of accumulated real cost `g`
/// for every node discovered so far. Relaxation follows the Dijkstra rule, so
/// a closed node can still take a cheaper `g` and parent. It is not expanded
/// again: the stale queue entry is dropped when popped.
#[tracing::instrument(skip(graph, coords, cancel), fields(nodes = graph.node_count()))]
pub fn astar_search(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    coords: &[(Weight, Weight)],
    cancel: &CancelToken,
) -> RunResult {
    let n = graph.node_count();
    let mut recorder = StepRecorder::new();
    let mut g: DistanceTable = vec![None; n];
    let mut parents: ParentMap = vec![None; n];
    let mut closed = VisitedSet::new();
    let mut frontier = MinFrontier::seeded(heuristic(coords, start, goal), start);
    let mut cancelled = false;
    g[start] = Some(0.0);

    while let Some(entry) = frontier.pop() {
        if should_stop(cancel, &recorder) {
            cancelled = true;
            break;
        }

        let current = entry.node;
        if !closed.insert(current) {
            continue;
        }

        recorder.record(
            StepKind::Visit,
            StepPayload::Search {
                current,
                visited: closed.clone(),
                costs: g.clone(),
                parents: parents.clone(),
            },
        );

        if current == goal {
            break;
        }

        let Some(base) = g[current] else {
            continue;
        };
        for &(neighbor, weight) in graph.neighbors(current) {
            let candidate = base + weight;
            if g[neighbor].is_none_or(|known| candidate < known) {
                g[neighbor] = Some(candidate);
                parents[neighbor] = Some(current);
                frontier.push(candidate + heuristic(coords, neighbor, goal), neighbor);
            }
        }
    }

    let request = RunRequest::between(start, goal);
    let path = goal_path(&parents, &request);
    finish(AlgorithmId::Astar, recorder, cancelled)
        .with_path(path)
        .with_distances(g)
}
