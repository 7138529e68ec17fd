//! Command implementations for all citynav commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use citynav_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route { from, to, metric } => {
                let metric = metric.unwrap_or(ctx.config.default_metric);
                let (_, graph) = ctx.load_graph();
                commands::route::execute(ctx.cli, &graph, from, to, metric)
            }
            Commands::Reach {
                from,
                to,
                algorithm,
            } => {
                let (_, graph) = ctx.load_graph();
                commands::reach::execute(ctx.cli, &graph, from, to, *algorithm)
            }
            Commands::Compare { from, to } => {
                let (_, graph) = ctx.load_graph();
                commands::compare::execute(ctx.cli, &graph, from, to)
            }
            Commands::Stats => {
                let (overlay, graph) = ctx.load_graph();
                commands::stats::execute(ctx.cli, &graph, &overlay)
            }
            Commands::Vertices => {
                let (overlay, graph) = ctx.load_graph();
                commands::vertices::execute(ctx.cli, &graph, &overlay)
            }
            Commands::Info { key } => {
                let (overlay, graph) = ctx.load_graph();
                commands::info::execute(ctx.cli, &graph, &overlay, key)
            }
            Commands::Places => commands::places::execute(ctx.cli),
            Commands::Node { command } => commands::node::execute(ctx, command),
            Commands::Edge { command } => commands::edge::execute(ctx, command),
            Commands::Overlay { command } => commands::overlay::execute(ctx, command),
        }
    }
}
