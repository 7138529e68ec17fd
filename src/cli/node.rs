//! Node subcommands for user-defined vertices

use super::parse::parse_coordinate;
use clap::Subcommand;

/// Node subcommands
#[derive(Subcommand, Debug)]
pub enum NodeCommands {
    /// Add a vertex, or replace an existing user-defined one
    Add {
        /// Vertex key
        key: String,

        /// Display name
        name: String,

        /// Longitude (x)
        #[arg(value_parser = parse_coordinate, allow_negative_numbers = true)]
        x: f64,

        /// Latitude (y)
        #[arg(value_parser = parse_coordinate, allow_negative_numbers = true)]
        y: f64,
    },

    /// Change name or coordinates of a user-defined vertex
    Edit {
        /// Vertex key
        key: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New longitude (requires --y)
        #[arg(long, value_parser = parse_coordinate, allow_negative_numbers = true, requires = "y")]
        x: Option<f64>,

        /// New latitude (requires --x)
        #[arg(long, value_parser = parse_coordinate, allow_negative_numbers = true, requires = "x")]
        y: Option<f64>,
    },

    /// Remove a user-defined vertex and every overlay edge touching it
    Remove {
        /// Vertex key
        key: String,
    },
}
