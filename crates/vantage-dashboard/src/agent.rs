//! Agent profile loading with an offline fallback.

use vantage_api::Backend;
use vantage_core::entities::AgentProfile;
use vantage_core::enums::AgentKind;

/// The agent a page shows. Pages never block on the profile fetch: a failed
/// fetch yields [`AgentState::Unavailable`] carrying the page's built-in
/// persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentState {
    Loaded(AgentProfile),
    Unavailable(AgentProfile),
}

impl AgentState {
    #[must_use]
    pub const fn profile(&self) -> &AgentProfile {
        match self {
            Self::Loaded(profile) | Self::Unavailable(profile) => profile,
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Built-in persona used when the backend cannot provide one.
#[must_use]
pub fn default_profile(kind: AgentKind) -> AgentProfile {
    let (name, role, description, capabilities): (&str, &str, &str, &[&str]) = match kind {
        AgentKind::Projects => (
            "Project Assistant",
            "Project management",
            "Helps with schedules, budgets, team allocation and risk.",
            &["Risk assessment", "Resource planning", "Status reporting"],
        ),
        AgentKind::Analytics => (
            "Analytics Assistant",
            "Marketing analytics",
            "Explains traffic, campaign performance and model results.",
            &["Traffic analysis", "SEO review", "Forecasting"],
        ),
    };
    AgentProfile {
        id: format!("{}-default", kind.as_str()),
        name: name.to_string(),
        role: role.to_string(),
        description: description.to_string(),
        capabilities: capabilities.iter().map(|c| (*c).to_string()).collect(),
    }
}

pub async fn load_agent<B: Backend>(backend: &B, kind: AgentKind) -> AgentState {
    match backend.agent_profile(kind).await {
        Ok(profile) => AgentState::Loaded(profile),
        Err(error) => {
            tracing::warn!(agent = %kind, %error, "agent profile unavailable, using default");
            AgentState::Unavailable(default_profile(kind))
        }
    }
}
