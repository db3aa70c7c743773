use clap::Args;
use std::path::PathBuf;

/// Where the graph comes from; defaults to the configured dataset
#[derive(Args, Debug, Clone, Default)]
pub struct GraphSourceArgs {
    /// JSON graph file (matrix or edge list)
    #[arg(long, conflicts_with = "dataset")]
    pub graph: Option<PathBuf>,

    /// Bundled dataset key (see `stepgraph datasets`)
    #[arg(long)]
    pub dataset: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Algorithm id: bfs, dfs, dijkstra, astar, bellman_ford, kruskal, prim
    pub algorithm: Option<String>,

    #[command(flatten)]
    pub source: GraphSourceArgs,

    /// Start node, by name or index
    #[arg(long, short)]
    pub start: Option<String>,

    /// Goal node, by name or index
    #[arg(long, short)]
    pub goal: Option<String>,

    /// Print only the final artifacts, not every step
    #[arg(long)]
    pub summary: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    #[command(flatten)]
    pub source: GraphSourceArgs,
}
