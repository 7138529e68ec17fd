use crate::graph::store::Graph;
use crate::graph::types::Edge;

/// Read-only adjacency access used by the search algorithms
pub trait GraphProvider {
    fn contains(&self, key: &str) -> bool;
    fn neighbors(&self, key: &str) -> &[Edge];
}

impl GraphProvider for Graph {
    fn contains(&self, key: &str) -> bool {
        Graph::contains(self, key)
    }

    fn neighbors(&self, key: &str) -> &[Edge] {
        Graph::neighbors(self, key)
    }
}
