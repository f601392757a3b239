use clap::{Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AnalysisKindArg {
    Seo,
    Swot,
    Industry,
}

/// Analysis commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnalysisCommands {
    /// List past analyses of one kind.
    List {
        kind: AnalysisKindArg,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Run an SEO analysis for a domain.
    Seo {
        #[arg(long)]
        domain: String,
    },
    /// Run a SWOT analysis for a business.
    Swot {
        #[arg(long)]
        business: String,
        /// Period label, defaults to the current quarter
        #[arg(long)]
        period: Option<String>,
    },
    /// Run an industry analysis.
    Industry {
        #[arg(long)]
        industry: String,
    },
}
