//! `citynav route` command - cheapest route between two vertices

use crate::cli::{Cli, OutputFormat};
use citynav_core::error::Result;
use citynav_core::format::format_cost;
use citynav_core::graph::{shortest_path, Graph, Metric, ShortestPath};

/// Execute the route command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str, metric: Metric) -> Result<()> {
    let route = shortest_path(graph, from, to, metric);

    match cli.format {
        OutputFormat::Json => {
            let output = route_json(graph, from, to, metric, &route);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_route(graph, from, to, metric, &route),
    }

    Ok(())
}

pub(crate) fn route_json(
    graph: &Graph,
    from: &str,
    to: &str,
    metric: Metric,
    route: &ShortestPath,
) -> serde_json::Value {
    let steps: Vec<_> = route
        .path
        .iter()
        .map(|key| serde_json::json!({ "key": key, "name": graph.display_name(key) }))
        .collect();

    serde_json::json!({
        "from": from,
        "to": to,
        "metric": metric,
        "found": route.is_found(),
        "cost": route.is_found().then_some(route.cost),
        "unit": metric.unit(),
        "hops": route.hops(),
        "path": steps,
    })
}

fn print_route(graph: &Graph, from: &str, to: &str, metric: Metric, route: &ShortestPath) {
    if !route.is_found() {
        println!("No route found from {} to {}", from, to);
        return;
    }

    println!("Route {} -> {} by {}:", from, to, metric);
    for (i, key) in route.path.iter().enumerate() {
        println!("  {:>2}. {:<5} {}", i + 1, key, graph.display_name(key));
    }
    println!(
        "Total: {} {} ({} hops)",
        format_cost(route.cost),
        metric.unit(),
        route.hops()
    );
}
