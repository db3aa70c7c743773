use super::*;
use crate::algos::fixtures;

fn run(graph: &Graph, request: RunRequest) -> RunResult {
    Dijkstra::default()
        .run(graph, &request, &CancelToken::new())
        .unwrap()
}

/// weights (0,1)=1, (1,2)=1, (0,2)=5: the two-hop route wins
#[test]
fn test_dijkstra_triangle_prefers_cheaper_detour() {
    let graph = fixtures::triangle();
    let result = run(&graph, RunRequest::between(0, 2));
    assert_eq!(result.path, Some(vec![0, 1, 2]));
    assert_eq!(result.distances.as_ref().unwrap()[2], Some(2.0));
    assert_eq!(result.path_cost(&graph), Some(2.0));
}

#[test]
fn test_dijkstra_visit_order_and_snapshots() {
    let graph = fixtures::triangle();
    let result = run(&graph, RunRequest::between(0, 2));
    let order: Vec<usize> = result
        .steps
        .iter()
        .filter_map(|s| s.payload.current())
        .collect();
    assert_eq!(order, vec![0, 1, 2]);

    // Snapshot is taken before the finalized node relaxes its neighbors
    match &result.steps[0].payload {
        StepPayload::Search { costs, parents, .. } => {
            assert_eq!(costs, &vec![Some(0.0), None, None]);
            assert_eq!(parents, &vec![None, None, None]);
        }
        other => panic!("unexpected payload: {other:?}"),
    }
    match &result.steps[1].payload {
        StepPayload::Search { costs, .. } => {
            assert_eq!(costs, &vec![Some(0.0), Some(1.0), Some(5.0)]);
        }
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[test]
fn test_dijkstra_stops_at_goal() {
    let graph = fixtures::path_graph(5);
    let result = run(&graph, RunRequest::between(0, 1));
    assert_eq!(result.steps.len(), 2);

    let full = Dijkstra {
        stop_at_goal: false,
    }
    .run(&graph, &RunRequest::between(0, 1), &CancelToken::new())
    .unwrap();
    assert_eq!(full.steps.len(), 5);
    assert_eq!(full.path, Some(vec![0, 1]));
}

#[test]
fn test_dijkstra_without_goal_explores_component() {
    let graph = fixtures::detour();
    let result = run(&graph, RunRequest::starting_at(0));
    assert_eq!(result.steps.len(), 6);
    assert!(result.path.is_none());
    assert_eq!(
        result.distances,
        Some(vec![
            Some(0.0),
            Some(7.0),
            Some(9.0),
            Some(20.0),
            Some(20.0),
            Some(11.0)
        ])
    );
}

#[test]
fn test_dijkstra_detour_path() {
    let graph = fixtures::detour();
    let result = run(&graph, RunRequest::between(0, 4));
    assert_eq!(result.path, Some(vec![0, 2, 5, 4]));
    assert_eq!(result.path_cost(&graph), Some(20.0));
}

#[test]
fn test_dijkstra_unreachable_goal() {
    let graph = fixtures::two_components();
    let result = run(&graph, RunRequest::between(0, 3));
    assert_eq!(result.path, Some(vec![]));
    assert_eq!(result.distances.as_ref().unwrap()[3], None);
    assert_eq!(result.steps.len(), 3);
}

#[test]
fn test_dijkstra_stale_entries_skipped() {
    // 2 is first reached at cost 5 via 0, then improved to 2 via 1
    let graph = fixtures::triangle();
    let result = Dijkstra {
        stop_at_goal: false,
    }
    .run(&graph, &RunRequest::starting_at(0), &CancelToken::new())
    .unwrap();
    let visits = result
        .steps
        .iter()
        .filter(|s| s.payload.current() == Some(2))
        .count();
    assert_eq!(visits, 1);
}

#[test]
fn test_dijkstra_cancelled() {
    let graph = fixtures::triangle();
    let cancel = CancelToken::new();
    cancel.cancel();
    let result = Dijkstra::default()
        .run(&graph, &RunRequest::between(0, 2), &cancel)
        .unwrap();
    assert!(result.is_cancelled());
    assert!(result.steps.is_empty());
}
