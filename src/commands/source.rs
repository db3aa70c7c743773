//! Graph source resolution shared by `run` and `graph`

use stepgraph_core::config::EngineConfig;
use stepgraph_core::error::Result;
use stepgraph_core::graph::{datasets, load_graph_file, Graph};

use crate::cli::GraphSourceArgs;

/// A graph plus the label it was loaded under
pub struct LoadedGraph {
    pub label: String,
    pub graph: Graph,
}

/// Load `--graph FILE`, else `--dataset KEY`, else the configured dataset
pub fn load(source: &GraphSourceArgs, config: &EngineConfig) -> Result<LoadedGraph> {
    if let Some(path) = &source.graph {
        return Ok(LoadedGraph {
            label: path.display().to_string(),
            graph: load_graph_file(path)?,
        });
    }

    let key = source.dataset.as_deref().unwrap_or(&config.run.dataset);
    Ok(LoadedGraph {
        label: key.to_string(),
        graph: datasets::load(key)?,
    })
}
