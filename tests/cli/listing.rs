use crate::cli::support::{stepgraph, write_file, SQUARE_EDGES};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: stepgraph"))
        .stdout(predicate::str::contains("algorithms"))
        .stdout(predicate::str::contains("datasets"));
}

#[test]
fn test_no_command_prints_version() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("stepgraph "));
}

// ============================================================================
// algorithms
// ============================================================================

#[test]
fn test_algorithms_lists_all_seven() {
    let dir = tempdir().unwrap();
    let output = stepgraph(dir.path())
        .args(["--format", "json", "algorithms"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["bfs", "dfs", "dijkstra", "astar", "bellman_ford", "kruskal", "prim"]
    );
    assert!(json
        .as_array()
        .unwrap()
        .iter()
        .all(|entry| entry["available"] == true));
}

#[test]
fn test_algorithms_reports_failed_registration() {
    let dir = tempdir().unwrap();
    write_file(&dir, "config.toml", "[astar]\ngrid_width = 0\n");
    stepgraph(dir.path())
        .args(["--format", "records", "algorithms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H stepgraph=1 records=1 mode=algorithms count=7"))
        .stdout(predicate::str::contains("A astar unavailable"))
        .stdout(predicate::str::contains("A dijkstra available"));
}

// ============================================================================
// datasets and graph
// ============================================================================

#[test]
fn test_datasets_human() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .arg("datasets")
        .assert()
        .success()
        .stdout(predicate::str::contains("(11 nodes, 20 edges) [default]"))
        .stdout(predicate::str::contains("(7 nodes, 9 edges)"));
}

#[test]
fn test_graph_records_for_dataset() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["--format", "records", "graph", "--dataset", "sample-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H stepgraph=1 records=1 mode=graph graph=sample-7 nodes=7 edges=9",
        ))
        .stdout(predicate::str::contains("N 0 S degree=1"))
        .stdout(predicate::str::contains("E X Y 2"));
}

#[test]
fn test_graph_json_from_file() {
    let dir = tempdir().unwrap();
    let graph = write_file(&dir, "square.json", SQUARE_EDGES);
    let output = stepgraph(dir.path())
        .args(["--format", "json", "graph", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(json["edges"].as_array().unwrap().len(), 5);
    assert_eq!(json["total_weight"], 20.0);
    assert_eq!(json["edges"][0]["source"], "A");
    assert_eq!(json["edges"][0]["target"], "B");
}
