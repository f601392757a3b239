//! Analytics page: insights, models, SEO/SWOT/industry analyses, and the
//! Google Analytics integration.

use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{Datelike, Utc};
use vantage_api::{ApiError, Backend};
use vantage_core::entities::{
    AnalyticsConnection, AnalyticsModel, IndustryAnalysis, IndustryAnalysisRequest, Insight,
    SeoAnalysis, SeoAnalysisRequest, SwotAnalysis, SwotAnalysisRequest, TrainModelRequest,
    mark_actioned,
};
use vantage_core::enums::{AgentKind, ModelType};
use vantage_core::errors::CoreError;

use crate::agent::{AgentState, load_agent};
use crate::agent_widget::{AgentQaWidget, SubmitOutcome};
use crate::error::DashboardError;
use crate::integration::AnalyticsIntegration;
use crate::notify::Notices;
use crate::pages::fetch_or_empty;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnalyticsTab {
    #[default]
    Overview,
    Insights,
    Models,
    Seo,
    Swot,
    Industry,
    Integrations,
}

impl AnalyticsTab {
    pub const ALL: &'static [Self] = &[
        Self::Overview,
        Self::Insights,
        Self::Models,
        Self::Seo,
        Self::Swot,
        Self::Industry,
        Self::Integrations,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Insights => "insights",
            Self::Models => "models",
            Self::Seo => "seo",
            Self::Swot => "swot",
            Self::Industry => "industry",
            Self::Integrations => "integrations",
        }
    }
}

impl fmt::Display for AnalyticsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsTab {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == normalized)
            .ok_or_else(|| CoreError::InvalidValue {
                field: "analytics tab".to_string(),
                value: raw.to_string(),
            })
    }
}

/// Train-model dialog state.
#[derive(Debug, Clone)]
pub struct TrainModelModal {
    pub open: bool,
    pub name: String,
    pub model_type: ModelType,
}

impl Default for TrainModelModal {
    fn default() -> Self {
        Self {
            open: false,
            name: String::new(),
            model_type: ModelType::Predictive,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisKind {
    #[default]
    Seo,
    Swot,
    Industry,
}

/// Run-analysis dialog state. Only the fields of `kind` are used.
#[derive(Debug, Clone, Default)]
pub struct AnalysisForm {
    pub open: bool,
    pub kind: AnalysisKind,
    pub domain: String,
    pub business_name: String,
    /// Blank means the current quarter (`2025-Q3`).
    pub period: String,
    pub industry: String,
}

#[derive(Debug)]
pub struct AnalyticsPage<B> {
    backend: Arc<B>,
    integration: AnalyticsIntegration,
    insights: Vec<Insight>,
    models: Vec<AnalyticsModel>,
    seo_analyses: Vec<SeoAnalysis>,
    swot_analyses: Vec<SwotAnalysis>,
    industry_analyses: Vec<IndustryAnalysis>,
    connection: Option<AnalyticsConnection>,
    agent: AgentState,
    widget: AgentQaWidget,
    active_tab: AnalyticsTab,
    train_modal: TrainModelModal,
    analysis_form: AnalysisForm,
    notices: Notices,
}

/// Re-fetch one collection after an action. `None` means the fetch failed
/// and an error notice was raised.
async fn refetch<T, F>(notices: &mut Notices, what: &str, fetch: F) -> Option<Vec<T>>
where
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    match fetch.await {
        Ok(items) => Some(items),
        Err(error) => {
            tracing::warn!(collection = what, %error, "refresh failed");
            notices.error("Refresh Failed", format!("Failed to load {what}: {error}"));
            None
        }
    }
}

fn current_quarter() -> String {
    let today = Utc::now().date_naive();
    format!("{}-Q{}", today.year(), today.month0() / 3 + 1)
}

impl<B: Backend> AnalyticsPage<B> {
    /// Load every collection and the analytics agent concurrently, and read
    /// the cached Google Analytics connection.
    pub async fn mount(backend: Arc<B>, integration: AnalyticsIntegration) -> Self {
        let (insights, models, seo_analyses, swot_analyses, industry_analyses, agent) =
            tokio::join!(
                fetch_or_empty("insights", backend.list_insights()),
                fetch_or_empty("models", backend.list_models()),
                fetch_or_empty("seo analyses", backend.list_seo_analyses()),
                fetch_or_empty("swot analyses", backend.list_swot_analyses()),
                fetch_or_empty("industry analyses", backend.list_industry_analyses()),
                load_agent(backend.as_ref(), AgentKind::Analytics),
            );
        let connection = integration.load();
        let widget = AgentQaWidget::new(AgentKind::Analytics, &agent);
        Self {
            backend,
            integration,
            insights,
            models,
            seo_analyses,
            swot_analyses,
            industry_analyses,
            connection,
            agent,
            widget,
            active_tab: AnalyticsTab::default(),
            train_modal: TrainModelModal::default(),
            analysis_form: AnalysisForm::default(),
            notices: Notices::default(),
        }
    }

    // -- accessors ----------------------------------------------------------

    #[must_use]
    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    #[must_use]
    pub fn models(&self) -> &[AnalyticsModel] {
        &self.models
    }

    #[must_use]
    pub fn seo_analyses(&self) -> &[SeoAnalysis] {
        &self.seo_analyses
    }

    #[must_use]
    pub fn swot_analyses(&self) -> &[SwotAnalysis] {
        &self.swot_analyses
    }

    #[must_use]
    pub fn industry_analyses(&self) -> &[IndustryAnalysis] {
        &self.industry_analyses
    }

    #[must_use]
    pub const fn connection(&self) -> Option<&AnalyticsConnection> {
        self.connection.as_ref()
    }

    #[must_use]
    pub const fn agent(&self) -> &AgentState {
        &self.agent
    }

    #[must_use]
    pub const fn widget(&self) -> &AgentQaWidget {
        &self.widget
    }

    #[must_use]
    pub const fn notices(&self) -> &Notices {
        &self.notices
    }

    pub const fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    #[must_use]
    pub const fn active_tab(&self) -> AnalyticsTab {
        self.active_tab
    }

    pub const fn set_tab(&mut self, tab: AnalyticsTab) {
        self.active_tab = tab;
    }

    // -- modals -------------------------------------------------------------

    #[must_use]
    pub const fn train_modal(&self) -> &TrainModelModal {
        &self.train_modal
    }

    pub fn open_train_modal(&mut self) {
        self.train_modal.open = true;
    }

    pub fn close_train_modal(&mut self) {
        self.train_modal = TrainModelModal::default();
    }

    pub const fn train_modal_mut(&mut self) -> &mut TrainModelModal {
        &mut self.train_modal
    }

    #[must_use]
    pub const fn analysis_form(&self) -> &AnalysisForm {
        &self.analysis_form
    }

    pub fn open_analysis(&mut self, kind: AnalysisKind) {
        self.analysis_form.open = true;
        self.analysis_form.kind = kind;
    }

    pub fn close_analysis(&mut self) {
        self.analysis_form = AnalysisForm::default();
    }

    pub const fn analysis_form_mut(&mut self) -> &mut AnalysisForm {
        &mut self.analysis_form
    }

    // -- actions ------------------------------------------------------------

    /// Train a model from the train-model dialog.
    pub async fn train_model(&mut self) -> Option<AnalyticsModel> {
        let name = self.train_modal.name.trim();
        if name.is_empty() {
            self.notices.warning("Validation Error", "Model name is required");
            return None;
        }
        let request = TrainModelRequest {
            name: name.to_string(),
            model_type: self.train_modal.model_type,
        };
        match self.backend.train_model(&request).await {
            Ok(model) => {
                tracing::info!(id = %model.id, model_type = %model.model_type, "model trained");
                self.notices.success("Model Trained", format!("{} is ready", model.name));
                self.close_train_modal();
                if let Some(models) =
                    refetch(&mut self.notices, "models", self.backend.list_models()).await
                {
                    self.models = models;
                }
                Some(model)
            }
            Err(error) => {
                self.notices.error("Training Failed", format!("Failed to train model: {error}"));
                None
            }
        }
    }

    pub async fn run_seo_analysis(&mut self) -> Option<SeoAnalysis> {
        let domain = self.analysis_form.domain.trim();
        if domain.is_empty() {
            self.notices.warning("Validation Error", "Domain is required");
            return None;
        }
        let request = SeoAnalysisRequest {
            domain: domain.to_string(),
        };
        match self.backend.run_seo_analysis(&request).await {
            Ok(analysis) => {
                self.notices.success(
                    "SEO Analysis Complete",
                    format!("Analyzed {}", analysis.domain),
                );
                self.close_analysis();
                if let Some(items) =
                    refetch(&mut self.notices, "SEO analyses", self.backend.list_seo_analyses())
                        .await
                {
                    self.seo_analyses = items;
                }
                Some(analysis)
            }
            Err(error) => {
                self.notices.error("Analysis Failed", format!("SEO analysis failed: {error}"));
                None
            }
        }
    }

    pub async fn run_swot_analysis(&mut self) -> Option<SwotAnalysis> {
        let business_name = self.analysis_form.business_name.trim();
        if business_name.is_empty() {
            self.notices.warning("Validation Error", "Business name is required");
            return None;
        }
        let period = match self.analysis_form.period.trim() {
            "" => current_quarter(),
            period => period.to_string(),
        };
        let request = SwotAnalysisRequest {
            business_name: business_name.to_string(),
            period,
        };
        match self.backend.run_swot_analysis(&request).await {
            Ok(analysis) => {
                self.notices.success(
                    "SWOT Analysis Complete",
                    format!("{} ({})", analysis.business_name, analysis.period),
                );
                self.close_analysis();
                if let Some(items) = refetch(
                    &mut self.notices,
                    "SWOT analyses",
                    self.backend.list_swot_analyses(),
                )
                .await
                {
                    self.swot_analyses = items;
                }
                Some(analysis)
            }
            Err(error) => {
                self.notices.error("Analysis Failed", format!("SWOT analysis failed: {error}"));
                None
            }
        }
    }

    pub async fn run_industry_analysis(&mut self) -> Option<IndustryAnalysis> {
        let industry = self.analysis_form.industry.trim();
        if industry.is_empty() {
            self.notices.warning("Validation Error", "Industry is required");
            return None;
        }
        let request = IndustryAnalysisRequest {
            industry: industry.to_string(),
        };
        match self.backend.run_industry_analysis(&request).await {
            Ok(analysis) => {
                self.notices.success(
                    "Industry Analysis Complete",
                    format!("Analyzed {}", analysis.industry),
                );
                self.close_analysis();
                if let Some(items) = refetch(
                    &mut self.notices,
                    "industry analyses",
                    self.backend.list_industry_analyses(),
                )
                .await
                {
                    self.industry_analyses = items;
                }
                Some(analysis)
            }
            Err(error) => {
                self.notices.error(
                    "Analysis Failed",
                    format!("Industry analysis failed: {error}"),
                );
                None
            }
        }
    }

    /// Report an insight as acted on, then flag it locally.
    ///
    /// The local flag only changes after the backend accepts the action, so
    /// the list never shows an action the backend did not record.
    pub async fn mark_insight_actioned(&mut self, id: &str) -> bool {
        match self.backend.action_insight(id).await {
            Ok(()) => {
                if !mark_actioned(&mut self.insights, id) {
                    tracing::debug!(id, "actioned insight is not in the local list");
                }
                self.notices.success("Insight Actioned", "Insight marked as actioned");
                true
            }
            Err(error) => {
                self.notices.error("Action Failed", format!("Failed to mark insight: {error}"));
                false
            }
        }
    }

    /// Connect a Google Analytics property and cache the connection.
    pub async fn connect_analytics(&mut self, property_id: &str) -> bool {
        match self
            .integration
            .connect(self.backend.as_ref(), property_id)
            .await
        {
            Ok(connection) => {
                self.notices.success(
                    "Google Analytics Connected",
                    format!("Connected to property {}", connection.property_id),
                );
                self.connection = Some(connection);
                true
            }
            Err(error) => {
                self.report_integration_error("Connection Failed", &error);
                false
            }
        }
    }

    pub async fn refresh_analytics(&mut self) -> bool {
        match self.integration.refresh(self.backend.as_ref()).await {
            Ok(connection) => {
                self.notices.success("Data Refreshed", "Google Analytics metrics updated");
                self.connection = Some(connection);
                true
            }
            Err(error) => {
                self.report_integration_error("Refresh Failed", &error);
                false
            }
        }
    }

    pub fn disconnect_analytics(&mut self) -> bool {
        match self.integration.disconnect() {
            Ok(()) => {
                self.connection = None;
                self.notices.info("Disconnected", "Google Analytics has been disconnected");
                true
            }
            Err(error) => {
                self.report_integration_error("Disconnect Failed", &error);
                false
            }
        }
    }

    fn report_integration_error(&mut self, title: &str, error: &DashboardError) {
        match error {
            DashboardError::Validation(message) => {
                self.notices.warning("Validation Error", message.clone());
            }
            other => self.notices.error(title, other.to_string()),
        }
    }

    /// Ask the analytics agent `question` through the widget.
    pub async fn ask_agent(&mut self, question: &str) -> SubmitOutcome {
        self.widget.open();
        self.widget.set_draft(question);
        let backend = Arc::clone(&self.backend);
        self.widget
            .submit(|question| async move {
                backend
                    .ask_agent(AgentKind::Analytics, &question)
                    .await
                    .map(|reply| reply.answer)
            })
            .await
    }
}
