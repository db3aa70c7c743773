use crate::cli::support::{stepgraph, write_file, SQUARE_EDGES};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Human output
// ============================================================================

#[test]
fn test_run_dijkstra_on_dataset() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["run", "dijkstra", "--dataset", "sample-7", "--start", "S", "--goal", "Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra on sample-7 (7 nodes, 9 edges)"))
        .stdout(predicate::str::contains("#0 visit S cost=0 visited=1"))
        .stdout(predicate::str::contains("path: S -> T -> Y (cost 15)"));
}

#[test]
fn test_run_bfs_visits_component_in_level_order() {
    let dir = tempdir().unwrap();
    let output = stepgraph(dir.path())
        .args(["--format", "records", "run", "bfs", "--dataset", "sample-7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let visited: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("S "))
        .filter_map(|line| line.split_whitespace().nth(3))
        .collect();
    assert_eq!(visited, vec!["S", "T", "U", "Y", "V", "X", "W"]);
}

#[test]
fn test_run_summary_omits_steps() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["run", "prim", "--dataset", "sample-7", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0").not())
        .stdout(predicate::str::contains("(weight 34)"));
}

#[test]
fn test_run_uses_default_dataset_and_algorithm() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs on sample-11 (11 nodes, 20 edges), start A"))
        .stdout(predicate::str::contains("11 steps"));
}

#[test]
fn test_run_bellman_ford_reports_cycle_check() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["run", "bellman-ford", "--dataset", "sample-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("relax S->T w=4 inf->4 pass=1"))
        .stdout(predicate::str::contains("converged"))
        .stdout(predicate::str::contains("negative cycle: no"));
}

#[test]
fn test_run_negative_weight_graph() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        &dir,
        "negative.json",
        r#"{"matrix": [[0, 2, 0], [2, 0, -1], [0, -1, 0]]}"#,
    );
    stepgraph(dir.path())
        .args(["run", "bellman_ford", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("negative cycle: yes"));
}

// ============================================================================
// Records output
// ============================================================================

#[test]
fn test_run_kruskal_records() {
    let dir = tempdir().unwrap();
    stepgraph(dir.path())
        .args(["--format", "records", "run", "kruskal", "--dataset", "sample-7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H stepgraph=1 records=1 mode=run algorithm=kruskal graph=sample-7 nodes=7 edges=9 start=S goal=- outcome=complete steps=9",
        ))
        .stdout(predicate::str::contains("S 0 accept-edge X-Y w=2 tree=1"))
        .stdout(predicate::str::contains("reject-edge"))
        .stdout(predicate::str::contains("T X Y 2"));
}

#[test]
fn test_run_unreachable_goal_records() {
    let dir = tempdir().unwrap();
    let graph = write_file(
        &dir,
        "split.json",
        r#"{"edges": [{"source": "a", "target": "b"}, {"source": "c", "target": "d"}]}"#,
    );
    stepgraph(dir.path())
        .args(["--format", "records", "run", "dijkstra", "--start", "a", "--goal", "d", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("P - cost=-"))
        .stdout(predicate::str::contains("D d -"));
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_run_json_from_edge_list_file() {
    let dir = tempdir().unwrap();
    let graph = write_file(&dir, "square.json", SQUARE_EDGES);

    let output = stepgraph(dir.path())
        .args(["--format", "json", "run", "astar", "--start", "A", "--goal", "C", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "astar");
    assert_eq!(json["outcome"], "complete");
    assert_eq!(json["nodes"], serde_json::json!(["A", "B", "C", "D"]));
    assert_eq!(json["path"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["path_cost"], 3.0);

    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), json["step_count"].as_u64().unwrap() as usize);
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step["index"], i);
        assert_eq!(step["kind"], "visit");
        assert_eq!(step["payload"]["type"], "search");
    }
}

#[test]
fn test_run_json_spanning_trees_agree() {
    let dir = tempdir().unwrap();
    let graph = write_file(&dir, "square.json", SQUARE_EDGES);

    let weight = |algorithm: &str| {
        let output = stepgraph(dir.path())
            .args(["--format", "json", "run", algorithm, "--summary", "--graph"])
            .arg(&graph)
            .output()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(json.get("steps").is_none());
        json["tree_weight"].as_f64().unwrap()
    };

    assert_eq!(weight("kruskal"), 6.0);
    assert_eq!(weight("prim"), 6.0);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_run_defaults_from_config_dir() {
    let dir = tempdir().unwrap();
    write_file(
        &dir,
        "config.toml",
        r#"
[run]
algorithm = "dijkstra"
dataset = "sample-7"
start = "S"
goal = "Y"
"#,
    );
    stepgraph(dir.path())
        .args(["--format", "records", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm=dijkstra graph=sample-7"))
        .stdout(predicate::str::contains("goal=Y"))
        .stdout(predicate::str::contains("P S T Y cost=15"));
}

#[test]
fn test_explicit_config_sets_engine_options() {
    let dir = tempdir().unwrap();
    let mut config = stepgraph_core::config::EngineConfig::default();
    config.dijkstra.stop_at_goal = false;
    let path = write_file(&dir, "engines.toml", &toml::to_string(&config).unwrap());

    // without early exit every node of sample-7 is finalized
    stepgraph(dir.path())
        .args(["--format", "records", "run", "dijkstra", "--dataset", "sample-7", "--goal", "T"])
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("steps=7"));

    stepgraph(dir.path())
        .args(["--format", "records", "run", "dijkstra", "--dataset", "sample-7", "--goal", "T"])
        .assert()
        .success()
        .stdout(predicate::str::contains("steps=2"));
}
