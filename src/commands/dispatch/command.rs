//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use citynav_core::config::NavConfig;
use citynav_core::error::Result;
use citynav_core::graph::Graph;
use citynav_core::overlay::{FsBackend, OverlayStore};
use citynav_core::topology::build_graph;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: NavConfig,
    pub overlay_path: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = NavConfig::load()?;
        let overlay_path = config.resolve_overlay_path(cli.overlay.as_deref());
        debug!(elapsed = ?start.elapsed(), "load_config");

        Ok(Self {
            cli,
            config,
            overlay_path,
            start,
        })
    }

    pub fn open_overlay(&self) -> OverlayStore<FsBackend> {
        OverlayStore::open_file(&self.overlay_path)
    }

    /// Open the overlay and assemble the full graph from it
    pub fn load_graph(&self) -> (OverlayStore<FsBackend>, Graph) {
        let overlay = self.open_overlay();
        let graph = build_graph(&overlay);
        debug!(elapsed = ?self.start.elapsed(), "build_graph");
        (overlay, graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("citynav {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route planning over the Puerto Ordaz street network.");
        println!();
        println!("Run `citynav --help` for usage information.");
        Ok(())
    }
}
