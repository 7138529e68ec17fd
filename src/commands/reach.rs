//! `citynav reach` command - reachability by BFS or DFS

use crate::cli::{Cli, OutputFormat};
use citynav_core::error::Result;
use citynav_core::graph::{reachable, Algorithm, Graph};

/// Execute the reach command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str, algorithm: Algorithm) -> Result<()> {
    let result = reachable(graph, from, to, algorithm);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "algorithm": algorithm,
                "found": result.found,
                "hops": result.hops(),
                "path": result.path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if result.found {
                println!(
                    "{} can reach {} ({}, {} hops)",
                    from,
                    to,
                    algorithm,
                    result.hops()
                );
                println!("  {}", result.path.join(" -> "));
            } else {
                println!("No route found from {} to {}", from, to);
            }
        }
    }

    Ok(())
}
