//! CLI argument parsing for citynav
//!
//! Global flags: --overlay, --format, --quiet, --verbose, --log-level, --log-json

pub mod edge;
pub mod node;
pub mod overlay;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use citynav_core::format::OutputFormat;
use citynav_core::graph::{Algorithm, Metric};
pub use edge::EdgeCommands;
pub use node::NodeCommands;
pub use overlay::OverlayCommands;
use parse::{parse_algorithm, parse_format, parse_metric};

/// CityNav - route planning over the Puerto Ordaz street network
#[derive(Parser, Debug)]
#[command(name = "citynav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Overlay file with user-defined places and connections
    #[arg(long, global = true, env = "CITYNAV_OVERLAY")]
    pub overlay: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `citynav_core=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cheapest route between two vertices
    Route {
        /// Origin vertex key
        from: String,

        /// Destination vertex key
        to: String,

        /// Cost to minimise (distance or time); defaults to the configured metric
        #[arg(long, short, value_parser = parse_metric)]
        metric: Option<Metric>,
    },

    /// Check whether one vertex can reach another
    Reach {
        /// Origin vertex key
        from: String,

        /// Destination vertex key
        to: String,

        /// Search algorithm (bfs or dfs)
        #[arg(long, short, value_parser = parse_algorithm, default_value = "bfs")]
        algorithm: Algorithm,
    },

    /// Run every search between two vertices side by side
    Compare {
        /// Origin vertex key
        from: String,

        /// Destination vertex key
        to: String,
    },

    /// Vertex and edge counts and density
    Stats,

    /// List all vertices in key order
    Vertices,

    /// Show a single vertex
    Info {
        /// Vertex key
        key: String,
    },

    /// List named points of interest
    Places,

    /// Manage user-defined vertices
    Node {
        #[command(subcommand)]
        command: NodeCommands,
    },

    /// Manage user-defined edges
    Edge {
        #[command(subcommand)]
        command: EdgeCommands,
    },

    /// Inspect or reset the overlay file
    Overlay {
        #[command(subcommand)]
        command: OverlayCommands,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_route_with_metric() {
        let cli = Cli::try_parse_from(["citynav", "route", "V1", "V13", "--metric", "tiempo"])
            .unwrap();
        match cli.command {
            Some(Commands::Route { from, to, metric }) => {
                assert_eq!(from, "V1");
                assert_eq!(to, "V13");
                assert_eq!(metric, Some(Metric::Time));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "citynav",
            "stats",
            "--format",
            "json",
            "--overlay",
            "/tmp/o.json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.overlay, Some(PathBuf::from("/tmp/o.json")));
    }

    #[test]
    fn test_format_defaults_to_human() {
        let cli = Cli::try_parse_from(["citynav", "stats"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
        assert!(Cli::try_parse_from(["citynav", "--format", "xml", "stats"]).is_err());
    }

    #[test]
    fn test_reject_unknown_algorithm() {
        assert!(Cli::try_parse_from(["citynav", "reach", "V1", "V2", "-a", "astar"]).is_err());
    }
}
