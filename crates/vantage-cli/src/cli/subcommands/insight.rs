use clap::Subcommand;

/// Insight commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InsightCommands {
    /// List insights.
    List {
        /// Only insights not yet actioned
        #[arg(long)]
        open: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Mark an insight as actioned.
    Action { id: String },
}
