//! Step traces
//!
//! Every engine reports its progress as an ordered list of `Step`s. A step
//! shares a common envelope (`index`, `kind`) and carries an
//! algorithm-specific `StepPayload`.

pub mod recorder;
pub mod replay;

pub use recorder::StepRecorder;
pub use replay::{path_to, reconstruct, Replay};

use crate::graph::{Edge, NodeId, Weight};
use serde::Serialize;
use std::collections::BTreeSet;

/// Parent of each node in the search tree, `None` for roots and unreached nodes
pub type ParentMap = Vec<Option<NodeId>>;

/// Tentative cost per node, `None` standing for +infinity
pub type DistanceTable = Vec<Option<Weight>>;

/// Nodes visited so far, kept sorted for stable output
pub type VisitedSet = BTreeSet<NodeId>;

/// What kind of observable state change a step records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    /// A node was finalized or entered
    Visit,
    /// A tentative distance improved
    Relax,
    /// An edge was examined; the family of `AcceptEdge` and `RejectEdge`
    EvaluateEdge,
    /// An examined edge joined the tree
    AcceptEdge,
    /// An examined edge would close a cycle
    RejectEdge,
    /// A run reached a fixed point: a relaxation pass changed nothing, or
    /// there were no edges to examine
    Converged,
}

impl StepKind {
    /// Coarse kind, folding edge outcomes into `EvaluateEdge`
    pub fn family(self) -> StepKind {
        match self {
            StepKind::AcceptEdge | StepKind::RejectEdge => StepKind::EvaluateEdge,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Visit => "visit",
            StepKind::Relax => "relax",
            StepKind::EvaluateEdge => "evaluate-edge",
            StepKind::AcceptEdge => "accept-edge",
            StepKind::RejectEdge => "reject-edge",
            StepKind::Converged => "converged",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Algorithm-specific snapshot carried by a step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepPayload {
    /// BFS and DFS
    Traversal {
        current: NodeId,
        visited: VisitedSet,
        parents: ParentMap,
    },
    /// Dijkstra and A*; `costs` holds the accumulated real cost
    Search {
        current: NodeId,
        visited: VisitedSet,
        costs: DistanceTable,
        parents: ParentMap,
    },
    /// One successful Bellman-Ford relaxation of `from -> to`
    Relaxation {
        iteration: usize,
        from: NodeId,
        to: NodeId,
        weight: Weight,
        previous: Option<Weight>,
        updated: Weight,
        distances: DistanceTable,
        parents: ParentMap,
    },
    /// A Bellman-Ford pass without relaxations
    Convergence {
        iteration: usize,
        distances: DistanceTable,
        parents: ParentMap,
    },
    /// Kruskal edge decision with the tree built so far
    EdgeEvaluation {
        edge: Edge,
        accepted: bool,
        tree: Vec<Edge>,
    },
    /// Prim node addition with the tree built so far
    TreeGrowth {
        current: NodeId,
        visited: VisitedSet,
        tree: Vec<Edge>,
    },
    /// Kruskal finished without any edge to examine
    ForestComplete {
        tree: Vec<Edge>,
        components: usize,
    },
}

impl StepPayload {
    /// Node the step is centred on, if any
    pub fn current(&self) -> Option<NodeId> {
        match self {
            StepPayload::Traversal { current, .. }
            | StepPayload::Search { current, .. }
            | StepPayload::TreeGrowth { current, .. } => Some(*current),
            StepPayload::Relaxation { to, .. } => Some(*to),
            StepPayload::Convergence { .. }
            | StepPayload::EdgeEvaluation { .. }
            | StepPayload::ForestComplete { .. } => None,
        }
    }
}

/// One entry of a trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub index: usize,
    pub kind: StepKind,
    pub payload: StepPayload,
}
