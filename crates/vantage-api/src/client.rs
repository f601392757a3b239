//! REST backend over reqwest.

use std::time::Duration;

use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use vantage_core::entities::{
    AgentAnswer, AgentProfile, AnalyticsMetrics, AnalyticsModel, AskRequest, IndustryAnalysis,
    IndustryAnalysisRequest, Insight, NewProject, Project, SeoAnalysis, SeoAnalysisRequest,
    SwotAnalysis, SwotAnalysisRequest, TrainModelRequest,
};
use vantage_core::enums::AgentKind;

use crate::Backend;
use crate::error::ApiError;
use crate::http::{check_response, decode_list, decode_one};

/// HTTP client for the dashboard backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpBackend {
    /// Build a client rooted at `base_url`.
    ///
    /// `base_url` should end with `/`; endpoint paths are joined under it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] for an unparseable base URL and
    /// [`ApiError::Http`] if the reqwest client cannot be built.
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("vantage/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");
        let resp = check_response(self.authorize(self.http.get(url)).send().await?).await?;
        Ok(resp.text().await?)
    }

    async fn post_text<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "POST");
        let resp =
            check_response(self.authorize(self.http.post(url)).json(body).send().await?).await?;
        Ok(resp.text().await?)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        decode_list(&self.get_text(path).await?)
    }

    async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode_one(&self.get_text(path).await?)
    }

    async fn post_one<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        decode_one(&self.post_text(path, body).await?)
    }
}

impl Backend for HttpBackend {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_list("projects/").await
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        self.post_one("projects/", project).await
    }

    async fn agent_profile(&self, agent: AgentKind) -> Result<AgentProfile, ApiError> {
        self.get_one(&format!("agents/{}/", agent.as_str())).await
    }

    async fn ask_agent(&self, agent: AgentKind, question: &str) -> Result<AgentAnswer, ApiError> {
        let body = AskRequest {
            question: question.to_string(),
        };
        self.post_one(&format!("agents/{}/ask/", agent.as_str()), &body)
            .await
    }

    async fn list_insights(&self) -> Result<Vec<Insight>, ApiError> {
        self.get_list("analytics/insights/").await
    }

    async fn action_insight(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("analytics/insights/{}/action/", urlencoding::encode(id));
        self.post_text(&path, &serde_json::json!({})).await?;
        Ok(())
    }

    async fn list_models(&self) -> Result<Vec<AnalyticsModel>, ApiError> {
        self.get_list("analytics/models/").await
    }

    async fn train_model(&self, request: &TrainModelRequest) -> Result<AnalyticsModel, ApiError> {
        self.post_one("analytics/models/train/", request).await
    }

    async fn list_seo_analyses(&self) -> Result<Vec<SeoAnalysis>, ApiError> {
        self.get_list("analytics/seo/").await
    }

    async fn run_seo_analysis(
        &self,
        request: &SeoAnalysisRequest,
    ) -> Result<SeoAnalysis, ApiError> {
        self.post_one("analytics/seo/run/", request).await
    }

    async fn list_swot_analyses(&self) -> Result<Vec<SwotAnalysis>, ApiError> {
        self.get_list("analytics/swot/").await
    }

    async fn run_swot_analysis(
        &self,
        request: &SwotAnalysisRequest,
    ) -> Result<SwotAnalysis, ApiError> {
        self.post_one("analytics/swot/run/", request).await
    }

    async fn list_industry_analyses(&self) -> Result<Vec<IndustryAnalysis>, ApiError> {
        self.get_list("analytics/industry/").await
    }

    async fn run_industry_analysis(
        &self,
        request: &IndustryAnalysisRequest,
    ) -> Result<IndustryAnalysis, ApiError> {
        self.post_one("analytics/industry/run/", request).await
    }

    async fn analytics_metrics(&self, property_id: &str) -> Result<AnalyticsMetrics, ApiError> {
        let path = format!(
            "integrations/google-analytics/{}/metrics/",
            urlencoding::encode(property_id)
        );
        self.get_one(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(base, None, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn joins_paths_under_base() {
        let backend = backend("http://localhost:8000/api/");
        assert_eq!(
            backend.url("analytics/models/train/").unwrap().as_str(),
            "http://localhost:8000/api/analytics/models/train/"
        );
    }

    #[test]
    fn rejects_bad_base_url() {
        let err = HttpBackend::new("not a url", None, Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn empty_token_is_dropped() {
        let backend =
            HttpBackend::new("http://x/api/", Some(String::new()), Duration::from_secs(5))
                .unwrap();
        assert!(backend.token.is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_http_error() {
        let backend = HttpBackend::new(
            "http://127.0.0.1:9/api/",
            None,
            Duration::from_millis(300),
        )
        .unwrap();
        let err = backend.list_projects().await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }
}
