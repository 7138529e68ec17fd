//! Road graph and path-finding operations
//!
//! Provides the directed multigraph and the searches run against it:
//! - Dijkstra for cost-optimal routes under a distance or time metric
//! - BFS for hop-minimal reachability
//! - DFS for plain reachability
//! - Graph provider trait decoupling the searches from the store

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{reachable, reachable_bfs, reachable_dfs, shortest_path};
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{
    check_weight, Algorithm, Coordinates, Edge, GraphStats, Metric, Reachability, ShortestPath,
    VertexInfo,
};
