mod agent;
mod analysis;
mod ga;
mod insight;
mod model;
mod project;

pub use agent::{AgentCommands, AgentKindArg};
pub use analysis::{AnalysisCommands, AnalysisKindArg};
pub use ga::GaCommands;
pub use insight::InsightCommands;
pub use model::ModelCommands;
pub use project::ProjectCommands;
