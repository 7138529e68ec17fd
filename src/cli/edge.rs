//! Edge subcommands for user-defined connections

use super::parse::parse_weight;
use clap::Subcommand;

/// Edge subcommands
#[derive(Subcommand, Debug)]
pub enum EdgeCommands {
    /// Add a directed edge, or replace the weights of an existing overlay edge
    Add {
        /// Origin vertex key
        from: String,

        /// Destination vertex key
        to: String,

        /// Length in metres
        #[arg(value_parser = parse_weight)]
        distance: f64,

        /// Travel time in minutes
        #[arg(value_parser = parse_weight)]
        time: f64,
    },

    /// Change the weights of an overlay edge
    Edit {
        /// Origin vertex key
        from: String,

        /// Destination vertex key
        to: String,

        /// New length in metres
        #[arg(long, value_parser = parse_weight)]
        distance: Option<f64>,

        /// New travel time in minutes
        #[arg(long, value_parser = parse_weight)]
        time: Option<f64>,
    },

    /// Remove an overlay edge
    Remove {
        /// Origin vertex key
        from: String,

        /// Destination vertex key
        to: String,
    },
}
