//! Ordering and partition primitives shared by the engines

pub mod frontier;
pub mod union_find;

pub use frontier::{FrontierEntry, MinFrontier};
pub use union_find::UnionFind;
