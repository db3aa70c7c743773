use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for stepgraph isolated from the user's config and log settings
pub fn stepgraph(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("stepgraph");
    cmd.env("STEPGRAPH_CONFIG_DIR", config_dir)
        .env_remove("STEPGRAPH_CONFIG")
        .env_remove("STEPGRAPH_LOG")
        .env_remove("STEPGRAPH_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `contents` to `name` inside `dir` and return the path
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Four nodes in a weighted square with one heavy diagonal
pub const SQUARE_EDGES: &str = r#"{
  "edges": [
    {"source": "A", "target": "B", "weight": 1},
    {"source": "B", "target": "C", "weight": 2},
    {"source": "C", "target": "D", "weight": 3},
    {"source": "D", "target": "A", "weight": 4},
    {"source": "A", "target": "C", "weight": 10}
  ]
}"#;
