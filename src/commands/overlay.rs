//! `citynav overlay` commands - inspect or reset the overlay file

use crate::cli::{OutputFormat, OverlayCommands};
use crate::commands::dispatch::CommandContext;
use citynav_core::bail_usage;
use citynav_core::error::Result;
use tracing::info;

pub fn execute(ctx: &CommandContext, command: &OverlayCommands) -> Result<()> {
    match command {
        OverlayCommands::List => list(ctx),
        OverlayCommands::Clear { yes } => {
            if !yes {
                bail_usage!("refusing to clear the overlay without --yes");
            }
            let mut overlay = ctx.open_overlay();
            let (nodes, edges) = (overlay.nodes().len(), overlay.edges().len());
            overlay.clear()?;
            info!(nodes, edges, "overlay cleared");

            match ctx.cli.format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "action": "cleared",
                        "removed_nodes": nodes,
                        "removed_edges": edges,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    if !ctx.cli.quiet {
                        println!("Overlay cleared: {} nodes, {} edges removed", nodes, edges);
                    }
                }
            }
            Ok(())
        }
    }
}

fn list(ctx: &CommandContext) -> Result<()> {
    let overlay = ctx.open_overlay();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(overlay.document())?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Overlay: {}", ctx.overlay_path.display());
            }
            println!("Nodes ({}):", overlay.nodes().len());
            for node in overlay.nodes() {
                println!(
                    "  {:<12} {} ({}, {})",
                    node.id, node.name, node.coordinates.0, node.coordinates.1
                );
            }
            println!("Edges ({}):", overlay.edges().len());
            for edge in overlay.edges() {
                println!(
                    "  {} -> {}  {} m, {} min",
                    edge.origin, edge.destination, edge.distance, edge.time
                );
            }
        }
    }

    Ok(())
}
