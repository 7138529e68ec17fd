//! `citynav compare` command - all searches between the same pair of vertices

use crate::cli::{Cli, OutputFormat};
use citynav_core::error::Result;
use citynav_core::format::format_cost;
use citynav_core::graph::{reachable_bfs, reachable_dfs, shortest_path, Graph, Metric};

/// One row of the comparison table
struct Row {
    label: &'static str,
    found: bool,
    cost: Option<String>,
    path: Vec<String>,
}

/// Execute the compare command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let by_distance = shortest_path(graph, from, to, Metric::Distance);
    let by_time = shortest_path(graph, from, to, Metric::Time);
    let bfs = reachable_bfs(graph, from, to);
    let dfs = reachable_dfs(graph, from, to);

    if cli.format == OutputFormat::Json {
        let output = serde_json::json!({
            "from": from,
            "to": to,
            "dijkstra_distance": super::route::route_json(graph, from, to, Metric::Distance, &by_distance),
            "dijkstra_time": super::route::route_json(graph, from, to, Metric::Time, &by_time),
            "bfs": { "found": bfs.found, "hops": bfs.hops(), "path": bfs.path },
            "dfs": { "found": dfs.found, "hops": dfs.hops(), "path": dfs.path },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let rows = [
        Row {
            label: "dijkstra (distance)",
            found: by_distance.is_found(),
            cost: Some(format!("{} m", format_cost(by_distance.cost))),
            path: by_distance.path.clone(),
        },
        Row {
            label: "dijkstra (time)",
            found: by_time.is_found(),
            cost: Some(format!("{} min", format_cost(by_time.cost))),
            path: by_time.path.clone(),
        },
        Row {
            label: "bfs",
            found: bfs.found,
            cost: None,
            path: bfs.path,
        },
        Row {
            label: "dfs",
            found: dfs.found,
            cost: None,
            path: dfs.path,
        },
    ];

    println!("Comparing searches from {} to {}", from, to);
    for row in &rows {
        if !row.found {
            println!("  {:<20} No route found", row.label);
            continue;
        }
        let hops = row.path.len().saturating_sub(1);
        match &row.cost {
            Some(cost) => println!("  {:<20} {} hops, {}", row.label, hops, cost),
            None => println!("  {:<20} {} hops", row.label, hops),
        }
        if !cli.quiet {
            println!("  {:<20} {}", "", row.path.join(" -> "));
        }
    }

    Ok(())
}
