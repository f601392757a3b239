use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `vtg` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vtg",
    version,
    about = "Vantage - marketing analytics and project portfolio dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows to show
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (only errors on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Serve built-in demo data instead of calling the API
    #[arg(long, global = true)]
    pub demo: bool,

    /// Colour table badges: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            demo: self.demo,
            color: self.color,
        }
    }
}
