//! CLI argument parsing for stepgraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GraphArgs, GraphSourceArgs, RunArgs};
pub use output::OutputFormat;

/// Stepgraph - step-by-step traces of classic graph algorithms
#[derive(Parser, Debug)]
#[command(name = "stepgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "stepgraph_core=trace")
    #[arg(long, global = true, env = "STEPGRAPH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "STEPGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an algorithm and print its step trace
    Run(RunArgs),

    /// List algorithms and whether they are available
    Algorithms,

    /// List the bundled sample graphs
    Datasets,

    /// Print the nodes and edges of a graph
    Graph(GraphArgs),
}
