//! Configuration type definitions

use crate::engine::AlgorithmId;
use crate::graph::DEFAULT_DATASET;
use serde::{Deserialize, Serialize};

/// Engine and run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Defaults applied when a command leaves them out
    #[serde(default)]
    pub run: RunDefaults,

    #[serde(default)]
    pub dijkstra: DijkstraConfig,

    #[serde(default)]
    pub astar: AstarConfig,

    #[serde(default)]
    pub bellman_ford: BellmanFordConfig,

    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Run defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDefaults {
    /// Algorithm used when none is named
    #[serde(default = "default_algorithm")]
    pub algorithm: AlgorithmId,

    /// Bundled dataset used when no graph file is given
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Start node, by name or index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Goal node, by name or index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

impl Default for RunDefaults {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            dataset: default_dataset(),
            start: None,
            goal: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DijkstraConfig {
    /// Stop once the goal is finalized (default true)
    #[serde(default = "default_true")]
    pub stop_at_goal: bool,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        Self { stop_at_goal: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AstarConfig {
    /// Fixed grid width for the heuristic (default `ceil(sqrt(n))`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_width: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BellmanFordConfig {
    /// Run the extra negative-cycle check pass (default true)
    #[serde(default = "default_true")]
    pub detect_negative_cycles: bool,
}

impl Default for BellmanFordConfig {
    fn default() -> Self {
        Self {
            detect_negative_cycles: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Engines that are registered as unavailable
    #[serde(default)]
    pub disabled: Vec<AlgorithmId>,
}

fn default_algorithm() -> AlgorithmId {
    AlgorithmId::Bfs
}

fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}

fn default_true() -> bool {
    true
}
