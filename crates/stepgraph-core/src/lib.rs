//! Stepgraph Core Library
//!
//! Deterministic step traces for classic graph algorithms: traversals,
//! shortest paths and minimum spanning trees over a weighted undirected graph.

pub mod algos;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod logging;
pub mod primitives;
pub mod registry;
pub mod trace;
