use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::{Metric, ShortestPath};
use crate::graph::GraphProvider;
use crate::trace_time;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost).
///
/// Equal costs order by vertex key so pops are deterministic.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: String,
    pub accumulated_cost: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .total_cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// State tracked during a Dijkstra search
struct DijkstraState {
    settled: HashSet<String>,
    costs: HashMap<String, f64>,
    predecessors: HashMap<String, String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(origin: &str) -> Self {
        let mut state = Self {
            settled: HashSet::new(),
            costs: HashMap::new(),
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
        };
        state.costs.insert(origin.to_string(), 0.0);
        state.heap.push(Reverse(HeapEntry {
            node_id: origin.to_string(),
            accumulated_cost: 0.0,
        }));
        state
    }

    /// Tentative cost of a vertex, +inf until first relaxed
    fn cost_of(&self, node_id: &str) -> f64 {
        self.costs.get(node_id).copied().unwrap_or(f64::INFINITY)
    }
}

/// Find the cheapest route from `origin` to `destination` under `metric`.
///
/// Stale heap entries are skipped on pop instead of being decreased in place,
/// and the search stops as soon as `destination` is settled. Minimality holds
/// only for non-negative weights, which is not checked. Unknown endpoints and
/// unreachable destinations yield [`ShortestPath::not_found`].
#[tracing::instrument(skip(graph), fields(origin = %origin, destination = %destination, metric = %metric))]
pub fn shortest_path(
    graph: &dyn GraphProvider,
    origin: &str,
    destination: &str,
    metric: Metric,
) -> ShortestPath {
    if !graph.contains(origin) || !graph.contains(destination) {
        tracing::debug!("endpoint not in graph");
        return ShortestPath::not_found();
    }

    let start = Instant::now();
    let mut state = DijkstraState::new(origin);

    while let Some(Reverse(HeapEntry {
        node_id: current_id,
        accumulated_cost,
    })) = state.heap.pop()
    {
        if !state.settled.insert(current_id.clone()) {
            continue;
        }

        if current_id == destination {
            break;
        }

        for edge in graph.neighbors(&current_id) {
            if state.settled.contains(&edge.destination) {
                continue;
            }

            let new_cost = accumulated_cost + edge.cost(metric);
            if new_cost < state.cost_of(&edge.destination) {
                state.costs.insert(edge.destination.clone(), new_cost);
                state
                    .predecessors
                    .insert(edge.destination.clone(), current_id.clone());
                state.heap.push(Reverse(HeapEntry {
                    node_id: edge.destination.clone(),
                    accumulated_cost: new_cost,
                }));
            }
        }
    }

    trace_time!(start, "shortest_path", settled = state.settled.len());

    let path = reconstruct_path(destination, &state.predecessors);
    if path.first().map(String::as_str) != Some(origin) {
        tracing::debug!("destination unreachable");
        return ShortestPath::not_found();
    }

    ShortestPath {
        path,
        cost: state.cost_of(destination),
    }
}
