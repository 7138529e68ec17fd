//! `citynav stats` command - graph size and density

use crate::cli::{Cli, OutputFormat};
use citynav_core::error::Result;
use citynav_core::graph::Graph;
use citynav_core::overlay::{OverlayBackend, OverlayStore};

/// Execute the stats command
pub fn execute<B: OverlayBackend>(cli: &Cli, graph: &Graph, overlay: &OverlayStore<B>) -> Result<()> {
    let stats = graph.stats();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "vertex_count": stats.vertex_count,
                "edge_count": stats.edge_count,
                "density": stats.density,
                "overlay": {
                    "nodes": overlay.nodes().len(),
                    "edges": overlay.edges().len(),
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Vertices: {}", stats.vertex_count);
            println!("Edges:    {}", stats.edge_count);
            println!("Density:  {:.4}", stats.density);
            if !cli.quiet {
                println!(
                    "Overlay:  {} nodes, {} edges",
                    overlay.nodes().len(),
                    overlay.edges().len()
                );
            }
        }
    }

    Ok(())
}
