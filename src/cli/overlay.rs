use clap::Subcommand;

/// Overlay subcommands
#[derive(Subcommand, Debug)]
pub enum OverlayCommands {
    /// Show every user-defined vertex and edge
    List,

    /// Remove every user-defined vertex and edge
    Clear {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}
