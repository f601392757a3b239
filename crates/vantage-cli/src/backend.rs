//! Runtime choice between the REST backend and the demo backend.

use vantage_api::{ApiError, Backend, DemoBackend, HttpBackend};
use vantage_core::entities::{
    AgentAnswer, AgentProfile, AnalyticsMetrics, AnalyticsModel, IndustryAnalysis,
    IndustryAnalysisRequest, Insight, NewProject, Project, SeoAnalysis, SeoAnalysisRequest,
    SwotAnalysis, SwotAnalysisRequest, TrainModelRequest,
};
use vantage_core::enums::AgentKind;

#[derive(Debug)]
pub enum AnyBackend {
    Http(HttpBackend),
    Demo(DemoBackend),
}

impl AnyBackend {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Demo(_) => "demo",
        }
    }
}

macro_rules! delegate {
    ($self:ident . $method:ident ( $($arg:expr),* )) => {
        match $self {
            Self::Http(backend) => backend.$method($($arg),*).await,
            Self::Demo(backend) => backend.$method($($arg),*).await,
        }
    };
}

impl Backend for AnyBackend {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        delegate!(self.list_projects())
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        delegate!(self.create_project(project))
    }

    async fn agent_profile(&self, agent: AgentKind) -> Result<AgentProfile, ApiError> {
        delegate!(self.agent_profile(agent))
    }

    async fn ask_agent(&self, agent: AgentKind, question: &str) -> Result<AgentAnswer, ApiError> {
        delegate!(self.ask_agent(agent, question))
    }

    async fn list_insights(&self) -> Result<Vec<Insight>, ApiError> {
        delegate!(self.list_insights())
    }

    async fn action_insight(&self, id: &str) -> Result<(), ApiError> {
        delegate!(self.action_insight(id))
    }

    async fn list_models(&self) -> Result<Vec<AnalyticsModel>, ApiError> {
        delegate!(self.list_models())
    }

    async fn train_model(&self, request: &TrainModelRequest) -> Result<AnalyticsModel, ApiError> {
        delegate!(self.train_model(request))
    }

    async fn list_seo_analyses(&self) -> Result<Vec<SeoAnalysis>, ApiError> {
        delegate!(self.list_seo_analyses())
    }

    async fn run_seo_analysis(
        &self,
        request: &SeoAnalysisRequest,
    ) -> Result<SeoAnalysis, ApiError> {
        delegate!(self.run_seo_analysis(request))
    }

    async fn list_swot_analyses(&self) -> Result<Vec<SwotAnalysis>, ApiError> {
        delegate!(self.list_swot_analyses())
    }

    async fn run_swot_analysis(
        &self,
        request: &SwotAnalysisRequest,
    ) -> Result<SwotAnalysis, ApiError> {
        delegate!(self.run_swot_analysis(request))
    }

    async fn list_industry_analyses(&self) -> Result<Vec<IndustryAnalysis>, ApiError> {
        delegate!(self.list_industry_analyses())
    }

    async fn run_industry_analysis(
        &self,
        request: &IndustryAnalysisRequest,
    ) -> Result<IndustryAnalysis, ApiError> {
        delegate!(self.run_industry_analysis(request))
    }

    async fn analytics_metrics(&self, property_id: &str) -> Result<AnalyticsMetrics, ApiError> {
        delegate!(self.analytics_metrics(property_id))
    }
}
