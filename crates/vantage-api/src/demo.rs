//! In-memory backend seeded from [`crate::fixtures`].
//!
//! Mutating calls (create, train, run, action) apply to the in-memory state,
//! so a follow-up list call sees them just like it would against the REST API.

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;
use vantage_core::entities::{
    AgentAnswer, AgentProfile, AnalyticsMetrics, AnalyticsModel, IndustryAnalysis,
    IndustryAnalysisRequest, Insight, NewProject, Project, SeoAnalysis, SeoAnalysisRequest,
    SwotAnalysis, SwotAnalysisRequest, TrainModelRequest, mark_actioned,
};
use vantage_core::enums::AgentKind;

use crate::error::ApiError;
use crate::{Backend, fixtures};

#[derive(Debug, Default)]
struct DemoState {
    projects: Vec<Project>,
    insights: Vec<Insight>,
    models: Vec<AnalyticsModel>,
    seo: Vec<SeoAnalysis>,
    swot: Vec<SwotAnalysis>,
    industry: Vec<IndustryAnalysis>,
    next_id: u64,
}

impl DemoState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-demo-{:04}", self.next_id)
    }
}

/// Deterministic backend for `--demo` sessions and tests.
#[derive(Debug)]
pub struct DemoBackend {
    state: RwLock<DemoState>,
    today: NaiveDate,
}

impl DemoBackend {
    /// Seed the backend with fixtures dated relative to the current day.
    #[must_use]
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Seed the backend as if the current time were `now`.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let state = DemoState {
            projects: fixtures::projects(today),
            insights: fixtures::insights(now),
            models: fixtures::models(now),
            seo: vec![fixtures::seo_analysis("seo-001".into(), "example.com", now)],
            swot: vec![fixtures::swot_analysis(
                "swot-001".into(),
                "Example Co",
                "2025-Q2",
                now,
            )],
            industry: vec![fixtures::industry_analysis(
                "ind-001".into(),
                "marketing software",
                now,
            )],
            next_id: 0,
        };
        Self {
            state: RwLock::new(state),
            today,
        }
    }

    /// An empty backend: every list is empty until something is created.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            state: RwLock::new(DemoState::default()),
            today: Utc::now().date_naive(),
        }
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn bad_request(message: &str) -> ApiError {
    ApiError::Api {
        status: 400,
        message: message.to_string(),
    }
}

impl Backend for DemoBackend {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        Ok(self.state.read().await.projects.clone())
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        if project.name.trim().is_empty() {
            return Err(bad_request("name: this field may not be blank"));
        }
        if let (Some(start), Some(end)) = (project.start_date, project.end_date) {
            if end < start {
                return Err(bad_request("end_date: must not be before start_date"));
            }
        }
        let mut state = self.state.write().await;
        let id = state.next_id("prj");
        let created = fixtures::project_from_request(id, project, self.today);
        tracing::debug!(id = %created.id, name = %created.name, "demo: project created");
        state.projects.push(created.clone());
        Ok(created)
    }

    async fn agent_profile(&self, agent: AgentKind) -> Result<AgentProfile, ApiError> {
        Ok(fixtures::agent_profile(agent))
    }

    async fn ask_agent(&self, agent: AgentKind, question: &str) -> Result<AgentAnswer, ApiError> {
        if question.trim().is_empty() {
            return Err(bad_request("question: this field may not be blank"));
        }
        Ok(AgentAnswer {
            answer: fixtures::agent_answer(agent, question),
        })
    }

    async fn list_insights(&self) -> Result<Vec<Insight>, ApiError> {
        Ok(self.state.read().await.insights.clone())
    }

    async fn action_insight(&self, id: &str) -> Result<(), ApiError> {
        let mut state = self.state.write().await;
        if mark_actioned(&mut state.insights, id) {
            Ok(())
        } else {
            Err(ApiError::NotFound {
                entity: "insight",
                id: id.to_string(),
            })
        }
    }

    async fn list_models(&self) -> Result<Vec<AnalyticsModel>, ApiError> {
        Ok(self.state.read().await.models.clone())
    }

    async fn train_model(&self, request: &TrainModelRequest) -> Result<AnalyticsModel, ApiError> {
        if request.name.trim().is_empty() {
            return Err(bad_request("name: this field may not be blank"));
        }
        let mut state = self.state.write().await;
        let id = state.next_id("mdl");
        let model = AnalyticsModel {
            performance_metrics: fixtures::trained_metrics(request.model_type, state.next_id),
            id,
            name: request.name.trim().to_string(),
            model_type: request.model_type,
            is_active: true,
            last_trained: Some(Utc::now()),
        };
        state.models.push(model.clone());
        Ok(model)
    }

    async fn list_seo_analyses(&self) -> Result<Vec<SeoAnalysis>, ApiError> {
        Ok(self.state.read().await.seo.clone())
    }

    async fn run_seo_analysis(
        &self,
        request: &SeoAnalysisRequest,
    ) -> Result<SeoAnalysis, ApiError> {
        let domain = request.domain.trim();
        if domain.is_empty() {
            return Err(bad_request("domain: this field may not be blank"));
        }
        let mut state = self.state.write().await;
        let id = state.next_id("seo");
        let analysis = fixtures::seo_analysis(id, domain, Utc::now());
        state.seo.push(analysis.clone());
        Ok(analysis)
    }

    async fn list_swot_analyses(&self) -> Result<Vec<SwotAnalysis>, ApiError> {
        Ok(self.state.read().await.swot.clone())
    }

    async fn run_swot_analysis(
        &self,
        request: &SwotAnalysisRequest,
    ) -> Result<SwotAnalysis, ApiError> {
        let business = request.business_name.trim();
        if business.is_empty() {
            return Err(bad_request("business_name: this field may not be blank"));
        }
        let mut state = self.state.write().await;
        let id = state.next_id("swot");
        let analysis = fixtures::swot_analysis(id, business, request.period.trim(), Utc::now());
        state.swot.push(analysis.clone());
        Ok(analysis)
    }

    async fn list_industry_analyses(&self) -> Result<Vec<IndustryAnalysis>, ApiError> {
        Ok(self.state.read().await.industry.clone())
    }

    async fn run_industry_analysis(
        &self,
        request: &IndustryAnalysisRequest,
    ) -> Result<IndustryAnalysis, ApiError> {
        let industry = request.industry.trim();
        if industry.is_empty() {
            return Err(bad_request("industry: this field may not be blank"));
        }
        let mut state = self.state.write().await;
        let id = state.next_id("ind");
        let analysis = fixtures::industry_analysis(id, industry, Utc::now());
        state.industry.push(analysis.clone());
        Ok(analysis)
    }

    async fn analytics_metrics(&self, property_id: &str) -> Result<AnalyticsMetrics, ApiError> {
        if property_id.trim().is_empty() {
            return Err(ApiError::NotFound {
                entity: "property",
                id: property_id.to_string(),
            });
        }
        Ok(fixtures::analytics_metrics(property_id.trim()))
    }
}
