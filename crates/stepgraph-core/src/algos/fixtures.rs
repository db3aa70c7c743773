//! Small graphs shared by the engine tests

use crate::graph::{Graph, Weight};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{i}")).collect()
}

/// Build a graph from an undirected edge list over `n` nodes
pub fn from_edges(n: usize, edges: &[(usize, usize, Weight)]) -> Graph {
    let mut matrix = vec![vec![0.0; n]; n];
    for &(u, v, w) in edges {
        matrix[u][v] = w;
        matrix[v][u] = w;
    }
    Graph::new(labels(n), matrix).unwrap()
}

/// (0,1)=1, (1,2)=1, (0,2)=5
pub fn triangle() -> Graph {
    from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)])
}

/// 0 - 1 - 2 - ... - (n-1), unit weights
pub fn path_graph(n: usize) -> Graph {
    let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1, 1.0)).collect();
    from_edges(n, &edges)
}

/// Component A = {0, 1, 2}, component B = {3, 4}
pub fn two_components() -> Graph {
    from_edges(5, &[(0, 1, 2.0), (1, 2, 3.0), (0, 2, 4.0), (3, 4, 1.0)])
}

/// 4-cycle 0-1-2-3-0 with weights 1, 2, 3, 4
pub fn square_cycle() -> Graph {
    from_edges(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)])
}

/// Weighted graph where the fewest-hop route is not the cheapest
pub fn detour() -> Graph {
    from_edges(
        6,
        &[
            (0, 1, 7.0),
            (0, 2, 9.0),
            (0, 5, 14.0),
            (1, 2, 10.0),
            (1, 3, 15.0),
            (2, 3, 11.0),
            (2, 5, 2.0),
            (3, 4, 6.0),
            (4, 5, 9.0),
        ],
    )
}

pub fn single_node() -> Graph {
    Graph::new(vec!["only".into()], vec![vec![0.0]]).unwrap()
}
