use clap::{Subcommand, ValueEnum};
use vantage_core::enums::AgentKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AgentKindArg {
    Projects,
    Analytics,
}

impl From<AgentKindArg> for AgentKind {
    fn from(arg: AgentKindArg) -> Self {
        match arg {
            AgentKindArg::Projects => Self::Projects,
            AgentKindArg::Analytics => Self::Analytics,
        }
    }
}

/// Agent commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AgentCommands {
    /// Show a page agent's profile.
    Show { agent: AgentKindArg },
    /// Ask a page agent a question.
    Ask {
        agent: AgentKindArg,
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },
}
