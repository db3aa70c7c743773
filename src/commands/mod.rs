//! CLI commands for stepgraph

pub mod algorithms;
pub mod datasets;
pub mod dispatch;
pub mod format;
pub mod graph;
pub mod run;
pub mod source;
