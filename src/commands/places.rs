//! `citynav places` command - named points of interest

use crate::cli::{Cli, OutputFormat};
use citynav_core::error::Result;
use citynav_core::topology::points_of_interest;

/// Execute the places command
pub fn execute(cli: &Cli) -> Result<()> {
    let categories = points_of_interest();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(categories)?);
        }
        OutputFormat::Human => {
            for category in categories {
                println!("{}:", category.category);
                for place in category.places {
                    println!("  {:<5} {}", place.vertex, place.name);
                }
            }
        }
    }

    Ok(())
}
