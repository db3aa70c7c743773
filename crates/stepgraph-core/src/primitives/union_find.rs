use crate::graph::NodeId;

/// Disjoint-set forest over node indices.
///
/// `find` compresses paths iteratively so deep chains never recurse.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<NodeId>,
    components: usize,
}

impl UnionFind {
    /// Every node starts in its own singleton set
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            components: n,
        }
    }

    /// Root of the set containing `x`, flattening the walked chain onto it
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `x` and `y`; false when they were already joined.
    ///
    /// The root of `x`'s set is attached under the root of `y`'s.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        self.parent[root_x] = root_y;
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets
    pub fn components(&self) -> usize {
        self.components
    }
}
