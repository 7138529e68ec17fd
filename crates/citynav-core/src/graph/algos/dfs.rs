use crate::graph::types::Reachability;
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// One level of the explicit DFS stack: a vertex and the index of the next
/// outgoing edge to try.
struct Frame<'a> {
    vertex: &'a str,
    next_edge: usize,
}

/// Depth-first reachability from `origin` to `destination`.
///
/// Descends through neighbours in adjacency order and returns the path of
/// the first descent that reaches `destination`. The path is only a witness,
/// it is not minimal in hops or cost. Uses an explicit stack, so depth is
/// bounded by memory rather than the call stack.
#[tracing::instrument(skip(graph), fields(origin = %origin, destination = %destination))]
pub fn reachable_dfs(graph: &dyn GraphProvider, origin: &str, destination: &str) -> Reachability {
    if !graph.contains(origin) || !graph.contains(destination) {
        tracing::debug!("endpoint not in graph");
        return Reachability::not_found();
    }

    if origin == destination {
        return Reachability::found(vec![origin.to_string()]);
    }

    let mut visited: HashSet<&str> = HashSet::from([origin]);
    let mut path: Vec<&str> = vec![origin];
    let mut stack: Vec<Frame<'_>> = vec![Frame {
        vertex: origin,
        next_edge: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let edges = graph.neighbors(frame.vertex);

        let Some(edge) = edges.get(frame.next_edge) else {
            // Exhausted: backtrack
            stack.pop();
            path.pop();
            continue;
        };
        frame.next_edge += 1;

        let neighbor = edge.destination.as_str();
        if visited.contains(neighbor) {
            continue;
        }

        path.push(neighbor);
        if neighbor == destination {
            tracing::debug!(visited = visited.len(), depth = path.len(), "destination reached");
            return Reachability::found(path.into_iter().map(str::to_string).collect());
        }

        visited.insert(neighbor);
        stack.push(Frame {
            vertex: neighbor,
            next_edge: 0,
        });
    }

    Reachability::not_found()
}
