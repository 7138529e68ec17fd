//! Graph algorithm implementations
//!
//! - `dijkstra`: cost-optimal route under a selectable metric
//! - `bfs`: hop-minimal reachability
//! - `dfs`: depth-first reachability
//! - `path`: predecessor-map path reconstruction shared by Dijkstra and BFS

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
mod path;

pub use bfs::reachable_bfs;
pub use dfs::reachable_dfs;
pub use dijkstra::shortest_path;

use crate::graph::types::{Algorithm, Reachability};
use crate::graph::GraphProvider;

/// Run the selected reachability search
pub fn reachable(
    graph: &dyn GraphProvider,
    origin: &str,
    destination: &str,
    algorithm: Algorithm,
) -> Reachability {
    match algorithm {
        Algorithm::Bfs => reachable_bfs(graph, origin, destination),
        Algorithm::Dfs => reachable_dfs(graph, origin, destination),
    }
}
