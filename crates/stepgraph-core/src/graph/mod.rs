//! Weighted undirected graph model
//!
//! - `model`: the immutable `Graph` every engine reads
//! - `import`: JSON loader that applies the symmetrization policy
//! - `datasets`: bundled sample graphs

pub mod datasets;
pub mod import;
pub mod model;

pub use datasets::{Dataset, DATASETS, DEFAULT_DATASET};
pub use import::{default_names, load_graph_file, parse_graph_json, GraphDocument};
pub use model::{Edge, Graph, NodeId, Weight};
