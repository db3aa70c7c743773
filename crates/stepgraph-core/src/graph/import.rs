//! JSON graph import
//!
//! Accepts two document shapes:
//! - `{"matrix": [[...]], "names": [...]}` with optional names
//! - `{"edges": [{"source": "A", "target": "B", "weight": 5}]}`
//!
//! Asymmetric matrices are symmetrized with the max-of-both-directions
//! policy before the graph is built.

use super::model::{Graph, Weight};
use crate::bail_invalid_graph;
use crate::error::{Result, StepGraphError};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Raw graph document as read from disk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub matrix: Option<Vec<Vec<Weight>>>,
    #[serde(default)]
    pub names: Option<Vec<String>>,
    #[serde(default)]
    pub edges: Option<Vec<EdgeRecord>>,
}

/// One entry of the edge-list form
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    pub source: Label,
    pub target: Label,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

/// Node label; numeric labels are accepted and kept as text
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Number(serde_json::Number),
}

impl Label {
    fn as_text(&self) -> String {
        match self {
            Label::Text(s) => s.clone(),
            Label::Number(n) => n.to_string(),
        }
    }
}

fn default_weight() -> Weight {
    1.0
}

/// Default labels: `A`..`Z`, then `N26`, `N27`, ...
pub fn default_names(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i < 26 {
                char::from(b'A' + i as u8).to_string()
            } else {
                format!("N{i}")
            }
        })
        .collect()
}

impl GraphDocument {
    /// Convert the document into a validated graph
    pub fn into_graph(self) -> Result<Graph> {
        match (self.matrix, self.edges) {
            (Some(matrix), _) => from_matrix(matrix, self.names),
            (None, Some(edges)) => from_edge_list(edges),
            (None, None) => bail_invalid_graph!("document must contain 'matrix' or 'edges'"),
        }
    }
}

fn from_matrix(matrix: Vec<Vec<Weight>>, names: Option<Vec<String>>) -> Result<Graph> {
    let n = matrix.len();
    if matrix.iter().any(|row| row.len() != n) {
        bail_invalid_graph!("matrix is not square");
    }
    let names = match names {
        Some(names) if names.len() != n => {
            bail_invalid_graph!("expected {} node names, got {}", n, names.len())
        }
        Some(names) => names,
        None => default_names(n),
    };
    Graph::from_asymmetric(names, matrix)
}

fn from_edge_list(edges: Vec<EdgeRecord>) -> Result<Graph> {
    let labels: BTreeSet<String> = edges
        .iter()
        .flat_map(|e| [e.source.as_text(), e.target.as_text()])
        .collect();
    let names: Vec<String> = labels.into_iter().collect();
    let index: BTreeMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let n = names.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for edge in &edges {
        let (source, target) = (edge.source.as_text(), edge.target.as_text());
        let u = index[source.as_str()];
        let v = index[target.as_str()];
        matrix[u][v] = edge.weight;
        matrix[v][u] = edge.weight;
    }
    Graph::new(names, matrix)
}

/// Parse a graph from JSON text
pub fn parse_graph_json(text: &str) -> Result<Graph> {
    let doc: GraphDocument = serde_json::from_str(text)?;
    doc.into_graph()
}

/// Load a graph from a JSON file
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_graph_file(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StepGraphError::not_found("graph file", path.display())
        } else {
            StepGraphError::Io(e)
        }
    })?;
    let graph = parse_graph_json(&text)?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph_loaded"
    );
    Ok(graph)
}
