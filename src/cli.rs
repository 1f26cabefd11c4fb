//! Command-line surface.

use clap::{Parser, Subcommand};

/// Close the Snap Store front end and refresh installed snaps.
#[derive(Parser, Debug)]
#[command(name = "snapup", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<MaintenanceCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MaintenanceCommand {
    /// Refresh installed snaps, then wait for Enter
    Refresh,
    /// Close the Snap Store first, then refresh
    Full,
}
