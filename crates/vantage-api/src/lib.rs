//! # vantage-api
//!
//! Backend collaborators for the Vantage dashboard.
//!
//! Pages talk to the backend only through the [`Backend`] trait. Two
//! implementations ship:
//! - [`HttpBackend`]: the REST API over reqwest
//! - [`DemoBackend`]: deterministic in-memory fixtures for demos and tests

mod client;
mod demo;
mod error;
pub mod fixtures;
mod http;

pub use client::HttpBackend;
pub use demo::DemoBackend;
pub use error::ApiError;

use std::future::Future;

use vantage_core::entities::{
    AgentAnswer, AgentProfile, AnalyticsMetrics, AnalyticsModel, IndustryAnalysis,
    IndustryAnalysisRequest, Insight, NewProject, Project, SeoAnalysis, SeoAnalysisRequest,
    SwotAnalysis, SwotAnalysisRequest, TrainModelRequest,
};
use vantage_core::enums::AgentKind;

/// Every backend operation the dashboard pages use.
pub trait Backend: Send + Sync {
    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>> + Send;

    fn create_project(
        &self,
        project: &NewProject,
    ) -> impl Future<Output = Result<Project, ApiError>> + Send;

    fn agent_profile(
        &self,
        agent: AgentKind,
    ) -> impl Future<Output = Result<AgentProfile, ApiError>> + Send;

    fn ask_agent(
        &self,
        agent: AgentKind,
        question: &str,
    ) -> impl Future<Output = Result<AgentAnswer, ApiError>> + Send;

    fn list_insights(&self) -> impl Future<Output = Result<Vec<Insight>, ApiError>> + Send;

    /// Tell the backend an insight was acted on.
    fn action_insight(&self, id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn list_models(&self) -> impl Future<Output = Result<Vec<AnalyticsModel>, ApiError>> + Send;

    fn train_model(
        &self,
        request: &TrainModelRequest,
    ) -> impl Future<Output = Result<AnalyticsModel, ApiError>> + Send;

    fn list_seo_analyses(&self)
    -> impl Future<Output = Result<Vec<SeoAnalysis>, ApiError>> + Send;

    fn run_seo_analysis(
        &self,
        request: &SeoAnalysisRequest,
    ) -> impl Future<Output = Result<SeoAnalysis, ApiError>> + Send;

    fn list_swot_analyses(
        &self,
    ) -> impl Future<Output = Result<Vec<SwotAnalysis>, ApiError>> + Send;

    fn run_swot_analysis(
        &self,
        request: &SwotAnalysisRequest,
    ) -> impl Future<Output = Result<SwotAnalysis, ApiError>> + Send;

    fn list_industry_analyses(
        &self,
    ) -> impl Future<Output = Result<Vec<IndustryAnalysis>, ApiError>> + Send;

    fn run_industry_analysis(
        &self,
        request: &IndustryAnalysisRequest,
    ) -> impl Future<Output = Result<IndustryAnalysis, ApiError>> + Send;

    /// Current headline metrics of a Google Analytics property.
    fn analytics_metrics(
        &self,
        property_id: &str,
    ) -> impl Future<Output = Result<AnalyticsMetrics, ApiError>> + Send;
}
