use crate::bail_invalid_graph;
use crate::error::{Result, StepGraphError};
use serde::Serialize;
use std::collections::HashSet;

/// Index of a node in the graph
pub type NodeId = usize;

/// Edge cost. Zero in the matrix means "no edge".
pub type Weight = f64;

/// An undirected edge, stored once with `u < v`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(u: NodeId, v: NodeId, weight: Weight) -> Self {
        if u <= v {
            Edge { u, v, weight }
        } else {
            Edge { u: v, v: u, weight }
        }
    }

    /// The endpoint opposite `node`
    pub fn other(&self, node: NodeId) -> NodeId {
        if node == self.u {
            self.v
        } else {
            self.u
        }
    }
}

/// Immutable weighted undirected graph.
///
/// Built once from a validated adjacency matrix; the adjacency and edge
/// views are derived at construction so engines never touch the matrix
/// directly. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct Graph {
    names: Vec<String>,
    weights: Vec<Vec<Weight>>,
    adjacency: Vec<Vec<(NodeId, Weight)>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph from node names and a symmetric weight matrix.
    ///
    /// Fails with `InvalidGraph` on an empty or non-square matrix, a name
    /// count mismatch, duplicate names, non-finite weights, self-loops or
    /// an asymmetric matrix.
    pub fn new(names: Vec<String>, weights: Vec<Vec<Weight>>) -> Result<Self> {
        let n = weights.len();
        if n == 0 {
            bail_invalid_graph!("graph must have at least one node");
        }
        if let Some((i, row)) = weights.iter().enumerate().find(|(_, row)| row.len() != n) {
            bail_invalid_graph!(
                "matrix is not square: row {} has {} entries, expected {}",
                i,
                row.len(),
                n
            );
        }
        if names.len() != n {
            bail_invalid_graph!("expected {} node names, got {}", n, names.len());
        }

        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                bail_invalid_graph!("duplicate node name: {}", name);
            }
        }

        for i in 0..n {
            for j in 0..n {
                let w = weights[i][j];
                if !w.is_finite() {
                    bail_invalid_graph!("weight ({}, {}) is not finite", i, j);
                }
                if i == j && w != 0.0 {
                    bail_invalid_graph!("self-loop on node {} ({})", names[i], w);
                }
                if w != weights[j][i] {
                    bail_invalid_graph!(
                        "matrix is not symmetric at ({}, {}): {} != {}",
                        i,
                        j,
                        w,
                        weights[j][i]
                    );
                }
            }
        }

        let adjacency = weights
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, w)| **w != 0.0)
                    .map(|(j, w)| (j, *w))
                    .collect()
            })
            .collect();

        let mut edges = Vec::new();
        for (i, row) in weights.iter().enumerate() {
            for (j, w) in row.iter().enumerate().skip(i + 1) {
                if *w != 0.0 {
                    edges.push(Edge::new(i, j, *w));
                }
            }
        }

        Ok(Graph {
            names,
            weights,
            adjacency,
            edges,
        })
    }

    /// Build a graph from a possibly asymmetric matrix, taking
    /// `max(w[i][j], w[j][i])` for every pair first.
    pub fn from_asymmetric(names: Vec<String>, mut weights: Vec<Vec<Weight>>) -> Result<Self> {
        let n = weights.len();
        if weights.iter().any(|row| row.len() != n) {
            bail_invalid_graph!("matrix is not square");
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if weights[i][j] != weights[j][i] {
                    let w = weights[i][j].max(weights[j][i]);
                    weights[i][j] = w;
                    weights[j][i] = w;
                }
            }
        }
        Graph::new(names, weights)
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Label of `node`, `None` outside the graph
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.names.get(node).map(String::as_str)
    }

    /// Display label of `node`; an index outside the graph shows as `?`
    pub fn name_of(&self, node: NodeId) -> &str {
        self.name(node).unwrap_or("?")
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn index_of(&self, name: &str) -> Option<NodeId> {
        self.names.iter().position(|n| n == name)
    }

    /// Neighbors of `node` with edge weights, ascending by neighbor index
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        &self.adjacency[node]
    }

    /// Every undirected edge once, ascending by `(u, v)`
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Weight of the edge between `u` and `v`, if any
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<Weight> {
        self.weights
            .get(u)
            .and_then(|row| row.get(v))
            .copied()
            .filter(|w| *w != 0.0)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.node_count()
    }

    /// Check that `node` is a valid index, reporting `role` on failure
    pub fn check_node(&self, role: &str, node: NodeId) -> Result<NodeId> {
        if self.contains(node) {
            Ok(node)
        } else {
            Err(StepGraphError::invalid_node(role, node, self.node_count()))
        }
    }

    /// Resolve a node given by name or by numeric index
    pub fn resolve_node(&self, role: &str, text: &str) -> Result<NodeId> {
        if let Some(idx) = self.index_of(text) {
            return Ok(idx);
        }
        match text.parse::<NodeId>() {
            Ok(idx) => self.check_node(role, idx),
            Err(_) => Err(StepGraphError::invalid_node(role, text, self.node_count())),
        }
    }

    /// Sum of the weights of `edges`
    pub fn total_weight<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Weight {
        edges.into_iter().map(|e| e.weight).sum()
    }
}
