use crate::cli::support::{stepgraph, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Exit codes: 2 usage, 3 data, 1 failure
// ============================================================================

#[test]
fn test_unknown_algorithm_exit_code_2() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["run", "floyd"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: unknown algorithm: floyd"));
}

#[test]
fn test_astar_without_goal_exit_code_2() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["run", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("requires a goal node"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["--format", "yaml", "datasets"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_start_exit_code_3() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["run", "bfs", "--dataset", "sample-7", "--start", "42"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid start node: 42"));
}

#[test]
fn test_unknown_dataset_exit_code_3() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["graph", "--dataset", "nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("dataset not found: nowhere"));
}

#[test]
fn test_asymmetric_file_is_symmetrized_but_bad_shape_is_rejected() {
    let dir = tempdir().unwrap();
    let ragged = write_file(&dir, "ragged.json", r#"{"matrix": [[0, 1], [1]]}"#);
    stepgraph(dir.path())
        .args(["graph", "--graph"])
        .arg(&ragged)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph"));

    let lopsided = write_file(&dir, "lopsided.json", r#"{"matrix": [[0, 5], [2, 0]]}"#);
    stepgraph(dir.path())
        .args(["--format", "records", "graph", "--graph"])
        .arg(&lopsided)
        .assert()
        .success()
        .stdout(predicate::str::contains("E A B 5"));
}

#[test]
fn test_malformed_json_exit_code_1() {
    let dir = tempdir().unwrap();
    let broken = write_file(&dir, "broken.json", "{ not json");
    stepgraph(dir.path())
        .args(["run", "bfs", "--graph"])
        .arg(&broken)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_missing_graph_file_exit_code_3() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["run", "bfs", "--graph"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let output = stepgraph(dir.path())
        .args(["--format", "json", "run", "floyd"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "unknown_algorithm");
}

#[test]
fn test_json_envelope_for_parse_errors() {
    let dir = tempdir().unwrap();
    let output = stepgraph(dir.path())
        .args(["--format", "json", "run", "--bogus"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_json_envelope_for_repeated_format_flag() {
    let dir = tempdir().unwrap();
    let output = stepgraph(dir.path())
        .args(["--format", "json", "--format", "json", "algorithms"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["--quiet", "run", "floyd"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_malformed_config_exit_code_1() {
    let dir = tempdir().unwrap();
    write_file(&dir, "config.toml", "[dijkstra]\nstop_at_goal = \"sometimes\"\n");
    stepgraph(dir.path())
        .arg("datasets")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_disabled_engine_exit_code_2() {
    let dir = tempdir().unwrap();
    write_file(&dir, "config.toml", "[registry]\ndisabled = [\"prim\"]\n");
    stepgraph(dir.path())
        .args(["run", "prim"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("disabled by configuration"));
}
