//! Graph algorithm engines
//!
//! Contains the seven trace-producing engines:
//! - `bfs`, `dfs`: unweighted traversals
//! - `dijkstra`, `astar`: priority-frontier searches
//! - `bellman_ford`: relaxation sweeps
//! - `kruskal`, `prim`: minimum spanning trees
//! - `shared`: helpers common to several engines

pub mod astar;
pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod shared;

#[cfg(test)]
pub(crate) mod fixtures;

pub use astar::{astar_search, grid_coordinates, AStar};
pub use bellman_ford::{bellman_ford_relax, BellmanFord};
pub use bfs::{bfs_traverse, Bfs};
pub use dfs::{dfs_traverse, Dfs};
pub use dijkstra::{dijkstra_search, Dijkstra};
pub use kruskal::{kruskal_mst, Kruskal};
pub use prim::{prim_mst, Prim};
