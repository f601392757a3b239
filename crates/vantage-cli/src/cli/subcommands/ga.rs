use clap::Subcommand;

/// Google Analytics integration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GaCommands {
    /// Show the cached connection.
    Status,
    /// Connect a property and cache its metrics.
    Connect { property_id: String },
    /// Re-fetch metrics for the connected property.
    Refresh,
    /// Forget the cached connection.
    Disconnect,
}
