use crate::cli::support::stepgraph;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_level_debug_shows_run_summary() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["--log-level", "debug", "run", "bfs", "--dataset", "sample-7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("run_finished"));
}

#[test]
fn test_default_level_is_quiet() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["run", "bfs", "--dataset", "sample-7"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_negative_cycle_warns() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("negative.json");
    std::fs::write(&graph, r#"{"matrix": [[0, -1], [-1, 0]]}"#).unwrap();
    stepgraph(dir.path())
        .args(["run", "bellman_ford", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("negative-weight cycle"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    let output = stepgraph(dir.path())
        .args(["--log-json", "--verbose", "run", "dfs", "--dataset", "sample-7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(parsed.get("level").is_some());
}
