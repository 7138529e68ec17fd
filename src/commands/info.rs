//! `citynav info` command - details of a single vertex

use crate::cli::{Cli, OutputFormat};
use citynav_core::error::{CityNavError, Result};
use citynav_core::graph::Graph;
use citynav_core::overlay::{OverlayBackend, OverlayStore};

/// Execute the info command
pub fn execute<B: OverlayBackend>(
    cli: &Cli,
    graph: &Graph,
    overlay: &OverlayStore<B>,
    key: &str,
) -> Result<()> {
    let info = graph
        .vertex_info(key)
        .ok_or_else(|| CityNavError::vertex_not_found(key))?;
    let user_defined = overlay.is_user_defined(key);

    match cli.format {
        OutputFormat::Json => {
            let mut output = serde_json::to_value(&info)?;
            output["user_defined"] = serde_json::Value::Bool(user_defined);
            output["neighbors"] = serde_json::to_value(graph.neighbors(key))?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}: {}", info.key, info.name);
            println!(
                "  coordinates: ({}, {})",
                info.coordinates.0, info.coordinates.1
            );
            println!(
                "  origin:      {}",
                if user_defined { "user-defined" } else { "base" }
            );
            println!("  out-degree:  {}", info.out_degree);
            if !cli.quiet {
                for edge in graph.neighbors(key) {
                    println!(
                        "    -> {:<5} {} m, {} min",
                        edge.destination, edge.distance, edge.time
                    );
                }
            }
        }
    }

    Ok(())
}
