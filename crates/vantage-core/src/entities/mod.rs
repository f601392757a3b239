//! Entity structs for all Vantage domain objects.
//!
//! Every struct is a value snapshot of what the backend returns. Pages replace
//! them wholesale on each fetch; the only in-place mutation is
//! [`mark_actioned`] on insights. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`.

mod agent;
mod analysis;
mod connection;
mod insight;
mod model;
mod project;
mod requests;

pub use agent::{AgentAnswer, AgentProfile};
pub use analysis::{IndustryAnalysis, SearchConsoleStats, SeoAnalysis, SwotAnalysis};
pub use connection::{AnalyticsConnection, AnalyticsMetrics};
pub use insight::{Insight, mark_actioned};
pub use model::AnalyticsModel;
pub use project::{Project, ProjectManager, ProjectRisk, Recommendation, TeamMember};
pub use requests::{
    AskRequest, IndustryAnalysisRequest, NewProject, SeoAnalysisRequest, SwotAnalysisRequest,
    TrainModelRequest,
};
