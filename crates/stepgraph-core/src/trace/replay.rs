//! Rebuild final algorithm state from a trace.
//!
//! Snapshot steps (visits, tree growth) replace the replayed state wholesale;
//! delta steps (relaxations, edge evaluations) are applied incrementally, so a
//! trace that dropped a state-changing step replays to a different result.

use super::{DistanceTable, ParentMap, Step, StepPayload, VisitedSet};
use crate::graph::{Edge, NodeId};

/// State reconstructed by folding a trace
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub visited: VisitedSet,
    pub parents: ParentMap,
    pub distances: Option<DistanceTable>,
    pub tree: Vec<Edge>,
}

impl Replay {
    fn new(node_count: usize) -> Self {
        Replay {
            visited: VisitedSet::new(),
            parents: vec![None; node_count],
            distances: None,
            tree: Vec::new(),
        }
    }

    fn apply(&mut self, step: &Step) {
        match &step.payload {
            StepPayload::Traversal {
                current, parents, ..
            } => {
                self.visited.insert(*current);
                self.parents.clone_from(parents);
            }
            StepPayload::Search {
                current,
                costs,
                parents,
                ..
            } => {
                self.visited.insert(*current);
                self.parents.clone_from(parents);
                self.distances = Some(costs.clone());
            }
            StepPayload::Relaxation {
                from,
                to,
                updated,
                distances: snapshot,
                ..
            } => {
                let n = self.parents.len();
                let distances = self.distances.get_or_insert_with(|| vec![None; n]);
                // the first relaxation out of the origin seeds its distance
                if distances[*from].is_none() {
                    distances[*from] = snapshot[*from];
                }
                distances[*to] = Some(*updated);
                self.parents[*to] = Some(*from);
            }
            StepPayload::Convergence { distances, .. } => {
                // a converged pass changes nothing; it only seeds an empty replay
                if self.distances.is_none() {
                    self.distances = Some(distances.clone());
                }
            }
            StepPayload::EdgeEvaluation { edge, accepted, .. } => {
                if *accepted {
                    self.tree.push(*edge);
                }
            }
            StepPayload::TreeGrowth { current, tree, .. } => {
                self.visited.insert(*current);
                self.tree.clone_from(tree);
            }
            StepPayload::ForestComplete { tree, .. } => self.tree.clone_from(tree),
        }
    }
}

/// Fold `steps` in order into the final state
pub fn reconstruct(node_count: usize, steps: &[Step]) -> Replay {
    let mut replay = Replay::new(node_count);
    for step in steps {
        replay.apply(step);
    }
    replay
}

/// Walk `parents` back from `goal` to `start`.
///
/// Returns an empty path when `goal` was never reached or when the parent
/// chain does not terminate at `start` within `parents.len()` hops.
pub fn path_to(parents: &[Option<NodeId>], start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut node = goal;
    while node != start {
        match parents.get(node).copied().flatten() {
            Some(parent) if path.len() <= parents.len() => {
                path.push(parent);
                node = parent;
            }
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}
