//! End-to-end behaviour of the routing engine over the assembled network

use citynav_core::graph::{
    reachable, reachable_bfs, reachable_dfs, shortest_path, Algorithm, Graph, Metric,
};
use citynav_core::overlay::{FsBackend, OverlayStore};
use citynav_core::topology::{base_graph, build_graph, BASE_VERTICES};
use tempfile::tempdir;

fn abc_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_vertex("A", None, None);
    graph.add_vertex("B", None, None);
    graph.add_vertex("C", None, None);
    graph.add_edge("A", "B", 300.0, 2.5);
    graph.add_edge("B", "C", 350.0, 3.0);
    graph
}

#[test]
fn test_route_cost_under_each_metric() {
    let graph = abc_graph();

    let by_distance = shortest_path(&graph, "A", "C", Metric::Distance);
    assert_eq!(by_distance.path, vec!["A", "B", "C"]);
    assert_eq!(by_distance.cost, 650.0);

    let by_time = shortest_path(&graph, "A", "C", Metric::Time);
    assert_eq!(by_time.cost, 5.5);

    let reverse = shortest_path(&graph, "C", "A", Metric::Distance);
    assert!(reverse.path.is_empty());
    assert!(reverse.cost.is_infinite());
}

#[test]
fn test_parallel_edges_choose_cheapest() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 300.0, 2.5);
    graph.add_edge("A", "B", 280.0, 2.2);

    assert_eq!(graph.neighbors("A").len(), 2);
    assert_eq!(shortest_path(&graph, "A", "B", Metric::Distance).cost, 280.0);
}

#[test]
fn test_every_search_reports_absent_endpoints_as_not_found() {
    let graph = base_graph();

    for (origin, destination) in [("V1", "V99"), ("V99", "V1")] {
        let route = shortest_path(&graph, origin, destination, Metric::Time);
        assert!(!route.is_found());
        assert!(route.cost.is_infinite());
        assert!(!reachable_bfs(&graph, origin, destination).found);
        assert!(!reachable_dfs(&graph, origin, destination).found);
    }
}

#[test]
fn test_self_route_is_free() {
    let graph = base_graph();
    for vertex in BASE_VERTICES {
        let route = shortest_path(&graph, vertex.key, vertex.key, Metric::Distance);
        assert_eq!(route.path, vec![vertex.key]);
        assert_eq!(route.cost, 0.0);
    }
}

#[test]
fn test_bfs_never_needs_more_hops_than_dfs() {
    let graph = base_graph();
    let keys = graph.all_vertices();

    for origin in &keys {
        for destination in &keys {
            let bfs = reachable(&graph, origin, destination, Algorithm::Bfs);
            let dfs = reachable(&graph, origin, destination, Algorithm::Dfs);
            assert_eq!(bfs.found, dfs.found, "{origin} -> {destination}");
            if bfs.found {
                assert!(bfs.hops() <= dfs.hops(), "{origin} -> {destination}");
            }
        }
    }
}

#[test]
fn test_base_network_is_strongly_connected() {
    let graph = base_graph();
    let keys = graph.all_vertices();

    for origin in &keys {
        for destination in &keys {
            assert!(
                reachable_bfs(&graph, origin, destination).found,
                "{origin} -> {destination}"
            );
        }
    }
}

#[test]
fn test_shortest_route_across_town() {
    let graph = base_graph();

    // Terminal de Autobuses to Centro Cívico
    let by_distance = shortest_path(&graph, "V15", "V13", Metric::Distance);
    assert_eq!(by_distance.path, vec!["V15", "V9", "V10", "V13"]);
    assert_eq!(by_distance.cost, 1250.0);

    let by_time = shortest_path(&graph, "V15", "V13", Metric::Time);
    assert_eq!(by_time.path.first().map(String::as_str), Some("V15"));
    assert_eq!(by_time.path.last().map(String::as_str), Some("V13"));
    assert!((by_time.cost - 12.1).abs() < 1e-9);
}

#[test]
fn test_overlay_survives_restart_and_feeds_the_graph() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("datos_personalizados.json");

    {
        let mut overlay = OverlayStore::open(FsBackend::new(&path));
        overlay
            .upsert_node("Hospital", "Hospital Uyapar", (-62.725, 8.275))
            .unwrap();
        overlay.upsert_edge("V6", "Hospital", 150.0, 1.5).unwrap();
        overlay.upsert_edge("Hospital", "V6", 150.0, 1.5).unwrap();
        overlay.upsert_edge("V6", "Hospital", 140.0, 1.4).unwrap();
    }

    let overlay = OverlayStore::open(FsBackend::new(&path));
    assert_eq!(overlay.nodes().len(), 1);
    assert_eq!(overlay.edges().len(), 2);
    assert_eq!(overlay.edges()[0].distance, 140.0);

    let graph = build_graph(&overlay);
    assert_eq!(graph.vertex_count(), 16);
    assert_eq!(graph.edge_count(), 52);

    let route = shortest_path(&graph, "V1", "Hospital", Metric::Distance);
    assert_eq!(route.path, vec!["V1", "V6", "Hospital"]);
    assert_eq!(route.cost, 640.0);
}

#[test]
fn test_unparsable_overlay_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("datos_personalizados.json");
    std::fs::write(&path, "{ \"nodos\": [ oops").unwrap();

    let overlay = OverlayStore::open(FsBackend::new(&path));
    assert!(overlay.nodes().is_empty());
    assert_eq!(build_graph(&overlay).stats(), base_graph().stats());
}
