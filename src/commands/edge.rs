//! `citynav edge` commands - manage user-defined edges

use crate::cli::EdgeCommands;
use crate::commands::dispatch::CommandContext;
use crate::commands::node::report;
use citynav_core::bail_usage;
use citynav_core::error::{CityNavError, Result};
use citynav_core::topology::build_graph;
use tracing::info;

pub fn execute(ctx: &CommandContext, command: &EdgeCommands) -> Result<()> {
    let mut overlay = ctx.open_overlay();

    let (action, from, to) = match command {
        EdgeCommands::Add {
            from,
            to,
            distance,
            time,
        } => {
            // Only connect vertices that already exist, so typos do not
            // silently create bare vertices
            let graph = build_graph(&overlay);
            for key in [from, to] {
                if !graph.contains(key) {
                    return Err(CityNavError::vertex_not_found(key.as_str()));
                }
            }

            let action = if overlay.edges().iter().any(|e| e.connects(from, to)) {
                "updated"
            } else {
                "added"
            };
            overlay.upsert_edge(from, to, *distance, *time)?;
            (action, from, to)
        }
        EdgeCommands::Edit {
            from,
            to,
            distance,
            time,
        } => {
            if distance.is_none() && time.is_none() {
                bail_usage!("nothing to change: pass --distance and/or --time");
            }
            if !overlay.edit_edge(from, to, *distance, *time)? {
                return Err(not_user_defined(from, to));
            }
            ("updated", from, to)
        }
        EdgeCommands::Remove { from, to } => {
            if !overlay.edges().iter().any(|e| e.connects(from, to)) {
                return Err(not_user_defined(from, to));
            }
            overlay.delete_edge(from, to)?;
            ("removed", from, to)
        }
    };

    info!(from = %from, to = %to, action, "edge");
    report(ctx, "edge", action, &format!("{} -> {}", from, to))
}

fn not_user_defined(from: &str, to: &str) -> CityNavError {
    CityNavError::RecordNotFound {
        what: format!("user-defined edge {} -> {}", from, to),
    }
}
