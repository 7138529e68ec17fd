use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::Reachability;
use crate::graph::GraphProvider;
use std::collections::{HashMap, HashSet, VecDeque};

/// Breadth-first reachability from `origin` to `destination`.
///
/// The destination is checked when it is discovered, before it would be
/// queued, so the first path found has the fewest edges. Weights are ignored.
#[tracing::instrument(skip(graph), fields(origin = %origin, destination = %destination))]
pub fn reachable_bfs(graph: &dyn GraphProvider, origin: &str, destination: &str) -> Reachability {
    if !graph.contains(origin) || !graph.contains(destination) {
        tracing::debug!("endpoint not in graph");
        return Reachability::not_found();
    }

    if origin == destination {
        return Reachability::found(vec![origin.to_string()]);
    }

    let mut visited: HashSet<&str> = HashSet::from([origin]);
    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::from([origin]);

    while let Some(current_id) = queue.pop_front() {
        for edge in graph.neighbors(current_id) {
            let neighbor = edge.destination.as_str();
            if visited.contains(neighbor) {
                continue;
            }

            predecessors.insert(neighbor.to_string(), current_id.to_string());

            if neighbor == destination {
                tracing::debug!(visited = visited.len(), "destination discovered");
                return Reachability::found(reconstruct_path(destination, &predecessors));
            }

            visited.insert(neighbor);
            queue.push_back(neighbor);
        }
    }

    Reachability::not_found()
}
