//! Shared engine contract
//!
//! Every algorithm implements `Engine`: it reads an immutable `Graph`, a
//! validated `RunRequest`, and returns the full `RunResult` once the run
//! completes or is cancelled.

use crate::error::{Result, StepGraphError};
use crate::graph::{Edge, Graph, NodeId, Weight};
use crate::trace::{DistanceTable, Step};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(test)]
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Identifier of a registered algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmId {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
    BellmanFord,
    Kruskal,
    Prim,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 7] = [
        AlgorithmId::Bfs,
        AlgorithmId::Dfs,
        AlgorithmId::Dijkstra,
        AlgorithmId::Astar,
        AlgorithmId::BellmanFord,
        AlgorithmId::Kruskal,
        AlgorithmId::Prim,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmId::Bfs => "bfs",
            AlgorithmId::Dfs => "dfs",
            AlgorithmId::Dijkstra => "dijkstra",
            AlgorithmId::Astar => "astar",
            AlgorithmId::BellmanFord => "bellman_ford",
            AlgorithmId::Kruskal => "kruskal",
            AlgorithmId::Prim => "prim",
        }
    }

    /// Human-readable algorithm name
    pub fn title(self) -> &'static str {
        match self {
            AlgorithmId::Bfs => "Breadth-first search",
            AlgorithmId::Dfs => "Depth-first search",
            AlgorithmId::Dijkstra => "Dijkstra shortest path",
            AlgorithmId::Astar => "A* search",
            AlgorithmId::BellmanFord => "Bellman-Ford shortest path",
            AlgorithmId::Kruskal => "Kruskal minimum spanning tree",
            AlgorithmId::Prim => "Prim minimum spanning tree",
        }
    }

    /// Whether a run needs a goal node
    pub fn requires_goal(self) -> bool {
        matches!(self, AlgorithmId::Astar)
    }
}

impl FromStr for AlgorithmId {
    type Err = StepGraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(AlgorithmId::Bfs),
            "dfs" => Ok(AlgorithmId::Dfs),
            "dijkstra" => Ok(AlgorithmId::Dijkstra),
            "astar" | "a_star" | "a*" => Ok(AlgorithmId::Astar),
            "bellman_ford" | "bellman-ford" | "bellman" => Ok(AlgorithmId::BellmanFord),
            "kruskal" => Ok(AlgorithmId::Kruskal),
            "prim" => Ok(AlgorithmId::Prim),
            _ => Err(StepGraphError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Start and goal for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunRequest {
    pub start: NodeId,
    pub goal: Option<NodeId>,
}

impl RunRequest {
    pub fn starting_at(start: NodeId) -> Self {
        RunRequest { start, goal: None }
    }

    pub fn between(start: NodeId, goal: NodeId) -> Self {
        RunRequest {
            start,
            goal: Some(goal),
        }
    }

    /// Check start and goal against `graph` before any work is done
    pub fn validate(&self, graph: &Graph) -> Result<()> {
        graph.check_node("start", self.start)?;
        if let Some(goal) = self.goal {
            graph.check_node("goal", goal)?;
        }
        Ok(())
    }
}

/// Cooperative stop signal shared between a caller and a running engine
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    #[cfg(test)]
    checks_left: Option<Arc<AtomicUsize>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        #[cfg(test)]
        self.count_check();
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
impl CancelToken {
    /// Token that cancels itself on check number `checks + 1`
    pub(crate) fn tripping_after(checks: usize) -> Self {
        CancelToken {
            flag: Arc::default(),
            checks_left: Some(Arc::new(AtomicUsize::new(checks))),
        }
    }

    fn count_check(&self) {
        let Some(left) = &self.checks_left else {
            return;
        };
        let spent = left.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if spent.is_err() {
            self.cancel();
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Complete,
    /// Stopped on request; the trace holds the steps recorded so far
    Cancelled,
}

/// Trace plus final artifacts of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub algorithm: AlgorithmId,
    pub outcome: RunOutcome,
    pub steps: Vec<Step>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<Vec<Edge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<DistanceTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cycle: Option<bool>,
}

impl RunResult {
    pub fn new(algorithm: AlgorithmId, outcome: RunOutcome, steps: Vec<Step>) -> Self {
        RunResult {
            algorithm,
            outcome,
            steps,
            path: None,
            tree: None,
            distances: None,
            negative_cycle: None,
        }
    }

    pub fn with_path(mut self, path: Option<Vec<NodeId>>) -> Self {
        self.path = path;
        self
    }

    pub fn with_tree(mut self, tree: Vec<Edge>) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn with_distances(mut self, distances: DistanceTable) -> Self {
        self.distances = Some(distances);
        self
    }

    pub fn with_negative_cycle(mut self, detected: Option<bool>) -> Self {
        self.negative_cycle = detected;
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.outcome == RunOutcome::Cancelled
    }

    /// Total edge weight along `path`, `None` without a non-empty path
    pub fn path_cost(&self, graph: &Graph) -> Option<Weight> {
        let path = self.path.as_ref().filter(|p| !p.is_empty())?;
        path.windows(2)
            .map(|pair| graph.weight(pair[0], pair[1]))
            .sum::<Option<Weight>>()
    }

    /// Total weight of the spanning tree, if one was produced
    pub fn tree_weight(&self) -> Option<Weight> {
        self.tree.as_ref().map(|t| Graph::total_weight(t))
    }
}

/// A graph algorithm producing a step trace
pub trait Engine: Send + Sync {
    fn id(&self) -> AlgorithmId;

    fn run(&self, graph: &Graph, request: &RunRequest, cancel: &CancelToken) -> Result<RunResult>;
}
