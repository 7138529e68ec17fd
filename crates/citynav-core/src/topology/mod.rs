//! Assembly of the routable graph from the base network and the overlay
//!
//! Insertion order is fixed: base vertices, base edges, overlay vertices,
//! overlay edges. Overlay vertices re-using a base key overwrite its name and
//! coordinates; overlay edges are appended next to any base edge for the
//! same pair.

mod base;
mod poi;

pub use base::{BaseEdge, BaseVertex, BASE_EDGES, BASE_VERTICES};
pub use poi::{find_place, points_of_interest, Place, PlaceCategory};

use crate::graph::Graph;
use crate::overlay::{OverlayBackend, OverlayStore};
use crate::trace_time;
use std::time::Instant;

/// Graph holding only the built-in network
pub fn base_graph() -> Graph {
    let mut graph = Graph::new();
    add_base(&mut graph);
    graph
}

fn add_base(graph: &mut Graph) {
    for v in BASE_VERTICES {
        graph.add_vertex(v.key, Some(v.name), Some(v.coordinates));
    }
    for e in BASE_EDGES {
        graph.add_edge(e.origin, e.destination, e.distance, e.time);
    }
}

/// Build the full graph: base network plus every overlay record
#[tracing::instrument(skip(overlay), fields(nodes = overlay.nodes().len(), edges = overlay.edges().len()))]
pub fn build_graph<B: OverlayBackend>(overlay: &OverlayStore<B>) -> Graph {
    let start = Instant::now();
    let mut graph = Graph::new();
    add_base(&mut graph);

    for node in overlay.nodes() {
        graph.add_vertex(&node.id, Some(&node.name), Some(node.coordinates));
    }
    for edge in overlay.edges() {
        graph.add_edge(&edge.origin, &edge.destination, edge.distance, edge.time);
    }

    trace_time!(
        start,
        "build_graph",
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    );
    graph
}
