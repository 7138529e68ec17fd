//! `citynav node` commands - manage user-defined vertices

use crate::cli::{NodeCommands, OutputFormat};
use crate::commands::dispatch::CommandContext;
use citynav_core::bail_usage;
use citynav_core::error::{CityNavError, Result};
use tracing::info;

pub fn execute(ctx: &CommandContext, command: &NodeCommands) -> Result<()> {
    let mut overlay = ctx.open_overlay();

    let (action, key) = match command {
        NodeCommands::Add { key, name, x, y } => {
            let action = if overlay.is_user_defined(key) {
                "updated"
            } else {
                "added"
            };
            overlay.upsert_node(key, name, (*x, *y))?;
            (action, key)
        }
        NodeCommands::Edit { key, name, x, y } => {
            let name = name.as_deref().filter(|n| !n.is_empty());
            let coordinates = x.zip(*y);
            if name.is_none() && coordinates.is_none() {
                bail_usage!("nothing to change: pass --name and/or --x/--y");
            }
            if !overlay.edit_node(key, name, coordinates)? {
                return Err(not_user_defined(key));
            }
            ("updated", key)
        }
        NodeCommands::Remove { key } => {
            if !overlay.is_user_defined(key) {
                return Err(not_user_defined(key));
            }
            overlay.delete_node(key)?;
            ("removed", key)
        }
    };

    info!(key = %key, action, "node");
    report(ctx, "node", action, key)
}

fn not_user_defined(key: &str) -> CityNavError {
    CityNavError::RecordNotFound {
        what: format!("user-defined node '{}'", key),
    }
}

/// Confirmation line shared by the overlay mutation commands
pub(crate) fn report(ctx: &CommandContext, kind: &str, action: &str, target: &str) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "kind": kind,
                "action": action,
                "target": target,
                "overlay": ctx.overlay_path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{} {}: {}", capitalize(kind), action, target);
            }
        }
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
