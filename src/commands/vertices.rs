//! `citynav vertices` command - list vertices in key order

use crate::cli::{Cli, OutputFormat};
use citynav_core::error::Result;
use citynav_core::graph::Graph;
use citynav_core::overlay::{OverlayBackend, OverlayStore};

/// Execute the vertices command
pub fn execute<B: OverlayBackend>(cli: &Cli, graph: &Graph, overlay: &OverlayStore<B>) -> Result<()> {
    let keys = graph.all_vertices();

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = keys
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key,
                        "name": graph.display_name(key),
                        "user_defined": overlay.is_user_defined(key),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for key in &keys {
                let marker = if overlay.is_user_defined(key) { "*" } else { " " };
                println!("{} {:<12} {}", marker, key, graph.display_name(key));
            }
            if !cli.quiet && keys.iter().any(|k| overlay.is_user_defined(k)) {
                println!();
                println!("* user-defined");
            }
        }
    }

    Ok(())
}
