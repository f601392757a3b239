use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AgentCommands, AnalysisCommands, GaCommands, InsightCommands, ModelCommands, ProjectCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Project portfolio.
    Projects {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// AI-generated marketing insights.
    Insights {
        #[command(subcommand)]
        action: InsightCommands,
    },
    /// Analytics models.
    Models {
        #[command(subcommand)]
        action: ModelCommands,
    },
    /// SEO, SWOT and industry analyses.
    Analysis {
        #[command(subcommand)]
        action: AnalysisCommands,
    },
    /// Page agents.
    Agent {
        #[command(subcommand)]
        action: AgentCommands,
    },
    /// Google Analytics integration.
    Ga {
        #[command(subcommand)]
        action: GaCommands,
    },
    /// Print the JSON Schema of an entity type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity type name (e.g. project, insight, analytics-connection)
    pub type_name: Option<String>,
}
