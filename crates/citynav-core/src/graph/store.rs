//! In-memory directed multigraph of the road network

use crate::graph::types::{Coordinates, Edge, GraphStats, VertexInfo, DEFAULT_COORDINATES};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, PartialEq)]
struct VertexMeta {
    name: Option<String>,
    coordinates: Option<Coordinates>,
}

/// Directed, weighted road graph.
///
/// Every vertex named by an edge is a member of the vertex set: `add_edge`
/// creates missing endpoints as bare vertices. Parallel edges between the
/// same ordered pair are kept, each insertion appends a new entry.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: BTreeMap<String, VertexMeta>,
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, or update its metadata if already present.
    ///
    /// `None` (or an empty name) leaves the previous value untouched.
    pub fn add_vertex(&mut self, key: &str, name: Option<&str>, coordinates: Option<Coordinates>) {
        let meta = self.vertices.entry(key.to_string()).or_default();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            meta.name = Some(name.to_string());
        }
        if let Some(coordinates) = coordinates {
            meta.coordinates = Some(coordinates);
        }
    }

    /// Append a directed edge from `origin` to `destination`.
    pub fn add_edge(&mut self, origin: &str, destination: &str, distance: f64, time: f64) {
        for endpoint in [origin, destination] {
            if !self.vertices.contains_key(endpoint) {
                tracing::debug!(vertex = endpoint, "auto-creating bare vertex for edge");
                self.vertices
                    .insert(endpoint.to_string(), VertexMeta::default());
            }
        }

        self.adjacency
            .entry(origin.to_string())
            .or_default()
            .push(Edge {
                destination: destination.to_string(),
                distance,
                time,
            });
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vertices.contains_key(key)
    }

    /// Outgoing edges of `key` in insertion order, empty when absent
    pub fn neighbors(&self, key: &str) -> &[Edge] {
        self.adjacency.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All vertex keys in lexicographic order
    pub fn all_vertices(&self) -> Vec<String> {
        self.vertices.keys().cloned().collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn stats(&self) -> GraphStats {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();
        let density = if vertex_count > 1 {
            edge_count as f64 / (vertex_count as f64 * (vertex_count as f64 - 1.0))
        } else {
            0.0
        };

        GraphStats {
            vertex_count,
            edge_count,
            density,
        }
    }

    /// Display name of a vertex, falling back to its key
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.vertices
            .get(key)
            .and_then(|meta| meta.name.as_deref())
            .unwrap_or(key)
    }

    /// Metadata and out-degree of a vertex, `None` if absent
    pub fn vertex_info(&self, key: &str) -> Option<VertexInfo> {
        let meta = self.vertices.get(key)?;
        Some(VertexInfo {
            key: key.to_string(),
            name: meta.name.clone().unwrap_or_else(|| key.to_string()),
            coordinates: meta.coordinates.unwrap_or(DEFAULT_COORDINATES),
            out_degree: self.neighbors(key).len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_defaults() {
        let mut graph = Graph::new();
        graph.add_vertex("V1", None, None);

        let info = graph.vertex_info("V1").unwrap();
        assert_eq!(info.name, "V1");
        assert_eq!(info.coordinates, (0.0, 0.0));
        assert_eq!(info.out_degree, 0);
    }

    #[test]
    fn test_add_vertex_overwrites_metadata() {
        let mut graph = Graph::new();
        graph.add_vertex("V1", Some("Old"), Some((1.0, 2.0)));
        graph.add_vertex("V1", Some("New"), None);

        let info = graph.vertex_info("V1").unwrap();
        assert_eq!(info.name, "New");
        assert_eq!(info.coordinates, (1.0, 2.0));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_auto_creates_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 300.0, 2.5);

        assert!(graph.contains("A"));
        assert!(graph.contains("B"));
        assert_eq!(graph.display_name("B"), "B");
        assert!(graph.neighbors("B").is_empty());
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 300.0, 2.5);
        graph.add_edge("A", "B", 300.0, 2.5);

        let neighbors = graph.neighbors("A");
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors
            .iter()
            .all(|e| e.destination == "B" && e.distance == 300.0 && e.time == 2.5));
    }

    #[test]
    fn test_neighbors_of_absent_vertex_is_empty() {
        let graph = Graph::new();
        assert!(graph.neighbors("nowhere").is_empty());
        assert!(graph.vertex_info("nowhere").is_none());
    }

    #[test]
    fn test_all_vertices_sorted() {
        let mut graph = Graph::new();
        for key in ["V2", "V10", "V1"] {
            graph.add_vertex(key, None, None);
        }
        assert_eq!(graph.all_vertices(), vec!["V1", "V10", "V2"]);
    }

    #[test]
    fn test_stats_density() {
        let mut graph = Graph::new();
        assert_eq!(graph.stats().density, 0.0);

        graph.add_vertex("A", None, None);
        assert_eq!(graph.stats().density, 0.0);

        graph.add_edge("A", "B", 1.0, 1.0);
        graph.add_edge("B", "C", 1.0, 1.0);
        let stats = graph.stats();
        assert_eq!(stats.vertex_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert!((stats.density - 2.0 / 6.0).abs() < 1e-12);
    }
}
