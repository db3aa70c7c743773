//! Bundled sample graphs

use super::model::{Graph, Weight};
use crate::error::{Result, StepGraphError};

/// A precomputed graph shipped with the engine
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub key: &'static str,
    pub title: &'static str,
    names: &'static [&'static str],
    matrix: &'static [&'static [u32]],
}

impl Dataset {
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Build the graph for this dataset
    pub fn build(&self) -> Result<Graph> {
        let names = self.names.iter().map(|s| s.to_string()).collect();
        let weights = self
            .matrix
            .iter()
            .map(|row| row.iter().map(|w| Weight::from(*w)).collect())
            .collect();
        Graph::new(names, weights)
    }
}

const SAMPLE_11: Dataset = Dataset {
    key: "sample-11",
    title: "Sample graph, 11 nodes",
    names: &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"],
    matrix: &[
        &[0, 8, 0, 0, 0, 0, 9, 10, 6, 12, 3],
        &[8, 0, 10, 0, 2, 0, 0, 0, 0, 0, 7],
        &[0, 10, 0, 9, 0, 0, 0, 0, 0, 0, 5],
        &[0, 0, 9, 0, 13, 12, 0, 0, 0, 0, 0],
        &[0, 2, 0, 13, 0, 10, 6, 0, 0, 0, 0],
        &[0, 0, 0, 12, 10, 0, 8, 0, 0, 0, 0],
        &[9, 0, 0, 0, 6, 8, 0, 7, 0, 0, 0],
        &[10, 0, 0, 0, 0, 0, 7, 0, 3, 0, 0],
        &[6, 0, 0, 0, 0, 0, 0, 3, 0, 10, 0],
        &[12, 0, 0, 0, 0, 0, 0, 0, 10, 0, 8],
        &[3, 7, 5, 0, 0, 0, 0, 0, 0, 8, 0],
    ],
};

const SAMPLE_7: Dataset = Dataset {
    key: "sample-7",
    title: "Sample graph, 7 nodes",
    names: &["S", "T", "U", "V", "W", "X", "Y"],
    matrix: &[
        &[0, 4, 0, 0, 0, 0, 0],
        &[4, 0, 8, 0, 0, 0, 11],
        &[0, 8, 0, 7, 0, 4, 0],
        &[0, 0, 7, 0, 9, 14, 0],
        &[0, 0, 0, 9, 0, 10, 0],
        &[0, 0, 4, 14, 10, 0, 2],
        &[0, 11, 0, 0, 0, 2, 0],
    ],
};

/// All bundled datasets, in display order
pub const DATASETS: &[Dataset] = &[SAMPLE_11, SAMPLE_7];

/// Key of the dataset used when none is requested
pub const DEFAULT_DATASET: &str = "sample-11";

pub fn list() -> &'static [Dataset] {
    DATASETS
}

/// Build the dataset registered under `key`
pub fn load(key: &str) -> Result<Graph> {
    DATASETS
        .iter()
        .find(|d| d.key == key)
        .ok_or_else(|| StepGraphError::not_found("dataset", key))?
        .build()
}
