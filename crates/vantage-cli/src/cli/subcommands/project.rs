use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects.
    List {
        /// Status filter: all, draft, active, on-hold, at-risk, completed, cancelled
        #[arg(long)]
        status: Option<String>,
        /// Case-insensitive match on name or description
        #[arg(long)]
        search: Option<String>,
        /// Sort: input, name, health, progress, end-date, budget
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one project with its team and risks.
    Show { id: String },
    /// Portfolio statistics.
    Stats,
    /// Create a project.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        budget: Option<f64>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },
}
