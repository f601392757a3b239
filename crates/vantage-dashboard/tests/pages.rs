//! Page controller behaviour against the demo backend and a backend with
//! scripted failures.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use vantage_api::{ApiError, Backend, DemoBackend};
use vantage_core::entities::{
    AgentAnswer, AgentProfile, AnalyticsMetrics, AnalyticsModel, IndustryAnalysis,
    IndustryAnalysisRequest, Insight, NewProject, Project, SeoAnalysis, SeoAnalysisRequest,
    SwotAnalysis, SwotAnalysisRequest, TrainModelRequest,
};
use vantage_core::enums::{AgentKind, ProjectStatus};
use vantage_core::filter::StatusFilter;
use vantage_dashboard::agent::{AgentState, default_profile};
use vantage_dashboard::agent_widget::SubmitOutcome;
use vantage_dashboard::integration::{AnalyticsIntegration, CONNECTION_KEY};
use vantage_dashboard::notify::NoticeLevel;
use vantage_dashboard::pages::{AnalysisKind, AnalyticsPage, ProjectsPage};
use vantage_store::{KeyValueStore, MemoryStore};

/// Demo backend where named operations fail with a 500.
struct Scripted {
    inner: DemoBackend,
    failing: HashSet<&'static str>,
    calls: AtomicUsize,
}

impl Scripted {
    fn new(failing: &[&'static str]) -> Self {
        Self {
            inner: DemoBackend::new(),
            failing: failing.iter().copied().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn check(&self, op: &'static str) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(op) || self.failing.contains("*") {
            Err(ApiError::Api {
                status: 500,
                message: format!("{op} exploded"),
            })
        } else {
            Ok(())
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Backend for Scripted {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.check("list_projects")?;
        self.inner.list_projects().await
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        self.check("create_project")?;
        self.inner.create_project(project).await
    }

    async fn agent_profile(&self, agent: AgentKind) -> Result<AgentProfile, ApiError> {
        self.check("agent_profile")?;
        self.inner.agent_profile(agent).await
    }

    async fn ask_agent(&self, agent: AgentKind, question: &str) -> Result<AgentAnswer, ApiError> {
        self.check("ask_agent")?;
        self.inner.ask_agent(agent, question).await
    }

    async fn list_insights(&self) -> Result<Vec<Insight>, ApiError> {
        self.check("list_insights")?;
        self.inner.list_insights().await
    }

    async fn action_insight(&self, id: &str) -> Result<(), ApiError> {
        self.check("action_insight")?;
        self.inner.action_insight(id).await
    }

    async fn list_models(&self) -> Result<Vec<AnalyticsModel>, ApiError> {
        self.check("list_models")?;
        self.inner.list_models().await
    }

    async fn train_model(&self, request: &TrainModelRequest) -> Result<AnalyticsModel, ApiError> {
        self.check("train_model")?;
        self.inner.train_model(request).await
    }

    async fn list_seo_analyses(&self) -> Result<Vec<SeoAnalysis>, ApiError> {
        self.check("list_seo_analyses")?;
        self.inner.list_seo_analyses().await
    }

    async fn run_seo_analysis(
        &self,
        request: &SeoAnalysisRequest,
    ) -> Result<SeoAnalysis, ApiError> {
        self.check("run_seo_analysis")?;
        self.inner.run_seo_analysis(request).await
    }

    async fn list_swot_analyses(&self) -> Result<Vec<SwotAnalysis>, ApiError> {
        self.check("list_swot_analyses")?;
        self.inner.list_swot_analyses().await
    }

    async fn run_swot_analysis(
        &self,
        request: &SwotAnalysisRequest,
    ) -> Result<SwotAnalysis, ApiError> {
        self.check("run_swot_analysis")?;
        self.inner.run_swot_analysis(request).await
    }

    async fn list_industry_analyses(&self) -> Result<Vec<IndustryAnalysis>, ApiError> {
        self.check("list_industry_analyses")?;
        self.inner.list_industry_analyses().await
    }

    async fn run_industry_analysis(
        &self,
        request: &IndustryAnalysisRequest,
    ) -> Result<IndustryAnalysis, ApiError> {
        self.check("run_industry_analysis")?;
        self.inner.run_industry_analysis(request).await
    }

    async fn analytics_metrics(&self, property_id: &str) -> Result<AnalyticsMetrics, ApiError> {
        self.check("analytics_metrics")?;
        self.inner.analytics_metrics(property_id).await
    }
}

fn memory_integration() -> (AnalyticsIntegration, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (AnalyticsIntegration::new(store.clone()), store)
}

// ---------------------------------------------------------------------------
// Mount
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failing_backend_mounts_empty_pages_with_default_agents() {
    let backend = Arc::new(Scripted::new(&["*"]));

    let projects = ProjectsPage::mount(Arc::clone(&backend)).await;
    assert!(projects.projects().is_empty());
    assert_eq!(
        projects.agent(),
        &AgentState::Unavailable(default_profile(AgentKind::Projects))
    );
    assert_eq!(projects.stats().total, 0);

    let (integration, _) = memory_integration();
    let analytics = AnalyticsPage::mount(backend, integration).await;
    assert!(analytics.insights().is_empty());
    assert!(analytics.models().is_empty());
    assert!(analytics.seo_analyses().is_empty());
    assert!(analytics.connection().is_none());
    assert_eq!(
        analytics.agent(),
        &AgentState::Unavailable(default_profile(AgentKind::Analytics))
    );
}

#[tokio::test]
async fn one_failing_fetch_leaves_the_rest() {
    let backend = Arc::new(Scripted::new(&["list_models", "agent_profile"]));
    let (integration, _) = memory_integration();

    let page = AnalyticsPage::mount(backend, integration).await;

    assert!(page.models().is_empty());
    assert!(!page.insights().is_empty());
    assert!(!page.agent().is_loaded());
    assert_eq!(page.widget().profile().name, "Analytics Assistant");
}

#[tokio::test]
async fn healthy_backend_loads_agent() {
    let page = ProjectsPage::mount(Arc::new(DemoBackend::new())).await;
    assert!(page.agent().is_loaded());
    assert_eq!(page.agent().profile().name, "Atlas");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn filters_and_search_narrow_the_visible_list() {
    let mut page = ProjectsPage::mount(Arc::new(DemoBackend::new())).await;
    let total = page.projects().len();
    assert_eq!(page.visible_projects().len(), total);

    page.set_status_filter(StatusFilter::Only(ProjectStatus::AtRisk));
    let visible = page.visible_projects();
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|p| p.status == ProjectStatus::AtRisk));

    page.set_status_filter(StatusFilter::All);
    page.set_search("WAREHOUSE");
    let names: Vec<_> = page.visible_projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Data Warehouse"]);

    // Stats ignore filters.
    assert_eq!(page.stats().total, total);
}

#[tokio::test]
async fn blank_project_name_never_reaches_backend() {
    let backend = Arc::new(Scripted::new(&[]));
    let mut page = ProjectsPage::mount(Arc::clone(&backend)).await;
    let calls_after_mount = backend.calls();

    page.open_create_modal();
    page.create_form_mut().name = "   ".into();
    assert!(page.create_project().await.is_none());

    assert_eq!(backend.calls(), calls_after_mount);
    let notice = page.notices().last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(page.create_modal().open);
}

#[tokio::test]
async fn created_project_appears_after_refetch() {
    let mut page = ProjectsPage::mount(Arc::new(DemoBackend::new())).await;
    let before = page.projects().len();

    page.open_create_modal();
    page.create_form_mut().name = "Podcast".into();
    page.create_form_mut().budget = 8_000.0;
    let created = page.create_project().await.unwrap();

    assert_eq!(page.projects().len(), before + 1);
    assert!(page.projects().iter().any(|p| p.id == created.id));
    assert!(!page.create_modal().open);
    assert_eq!(page.create_modal().form, NewProject::default());
    assert_eq!(page.notices().last().unwrap().level, NoticeLevel::Success);
}

#[tokio::test]
async fn failed_create_keeps_form_and_list() {
    let backend = Arc::new(Scripted::new(&["create_project"]));
    let mut page = ProjectsPage::mount(backend).await;
    let before = page.projects().to_vec();

    page.open_create_modal();
    page.create_form_mut().name = "Doomed".into();
    assert!(page.create_project().await.is_none());

    assert_eq!(page.projects(), before.as_slice());
    assert!(page.create_modal().open);
    assert_eq!(page.create_modal().form.name, "Doomed");
    assert_eq!(page.notices().last().unwrap().level, NoticeLevel::Error);
}

#[tokio::test]
async fn agent_failure_keeps_widget_open() {
    let backend = Arc::new(Scripted::new(&["ask_agent"]));
    let mut page = ProjectsPage::mount(backend).await;

    let outcome = page.ask_agent("What is late?").await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert!(page.widget().is_open());
    assert_eq!(page.widget().draft(), "What is late?");
}

#[tokio::test]
async fn agent_answer_is_stored() {
    let mut page = ProjectsPage::mount(Arc::new(DemoBackend::new())).await;
    assert_eq!(page.ask_agent("Budget?").await, SubmitOutcome::Answered);
    assert!(page.widget().answer().unwrap().contains("Budget"));
    assert!(!page.widget().is_open());
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn marking_an_insight_flags_only_that_insight() {
    let (integration, _) = memory_integration();
    let mut page = AnalyticsPage::mount(Arc::new(DemoBackend::new()), integration).await;
    let before = page.insights().to_vec();
    let target = before[1].id.clone();

    assert!(page.mark_insight_actioned(&target).await);

    for (old, new) in before.iter().zip(page.insights()) {
        if old.id == target {
            assert!(new.is_actioned);
        } else {
            assert_eq!(old, new);
        }
    }
}

#[tokio::test]
async fn rejected_action_leaves_insights_untouched() {
    let backend = Arc::new(Scripted::new(&["action_insight"]));
    let (integration, _) = memory_integration();
    let mut page = AnalyticsPage::mount(backend, integration).await;
    let before = page.insights().to_vec();

    assert!(!page.mark_insight_actioned(&before[0].id).await);

    assert_eq!(page.insights(), before.as_slice());
    assert!(page.notices().has_errors());
}

#[tokio::test]
async fn training_validates_then_refetches() {
    let (integration, _) = memory_integration();
    let mut page = AnalyticsPage::mount(Arc::new(DemoBackend::new()), integration).await;
    let before = page.models().len();

    page.open_train_modal();
    assert!(page.train_model().await.is_none());
    assert_eq!(page.notices().last().unwrap().level, NoticeLevel::Warning);

    page.train_modal_mut().name = "Lead scoring".into();
    let model = page.train_model().await.unwrap();
    assert_eq!(page.models().len(), before + 1);
    assert_eq!(page.models().last().unwrap().id, model.id);
    assert!(!page.train_modal().open);
}

#[tokio::test]
async fn analyses_validate_their_key_field() {
    let (integration, _) = memory_integration();
    let mut page = AnalyticsPage::mount(Arc::new(DemoBackend::empty()), integration).await;

    page.open_analysis(AnalysisKind::Seo);
    assert!(page.run_seo_analysis().await.is_none());
    assert!(page.run_swot_analysis().await.is_none());
    assert!(page.run_industry_analysis().await.is_none());
    assert_eq!(page.notices().len(), 3);

    page.analysis_form_mut().domain = "acme.io".into();
    page.run_seo_analysis().await.unwrap();
    assert_eq!(page.seo_analyses().len(), 1);

    page.open_analysis(AnalysisKind::Swot);
    page.analysis_form_mut().business_name = "Acme".into();
    let swot = page.run_swot_analysis().await.unwrap();
    assert!(swot.period.contains("-Q"));
    assert_eq!(page.swot_analyses().len(), 1);

    page.open_analysis(AnalysisKind::Industry);
    page.analysis_form_mut().industry = "fintech".into();
    page.run_industry_analysis().await.unwrap();
    assert_eq!(page.industry_analyses().len(), 1);
    assert!(!page.analysis_form().open);
}

#[tokio::test]
async fn connect_refresh_disconnect_cycle() {
    let (integration, store) = memory_integration();
    let backend = Arc::new(DemoBackend::new());
    let mut page = AnalyticsPage::mount(Arc::clone(&backend), integration.clone()).await;

    assert!(!page.connect_analytics("  ").await);
    assert_eq!(page.notices().last().unwrap().level, NoticeLevel::Warning);
    assert_eq!(store.get(CONNECTION_KEY).unwrap(), None);

    let started = chrono::Utc::now();
    assert!(page.connect_analytics("G-777").await);
    let connection = page.connection().unwrap().clone();
    assert!(connection.is_connected);
    assert!(connection.last_sync >= started);

    // A fresh mount reads the cached record.
    let remounted = AnalyticsPage::mount(Arc::clone(&backend), integration.clone()).await;
    assert_eq!(remounted.connection(), Some(&connection));

    assert!(page.refresh_analytics().await);
    assert!(page.connection().unwrap().last_sync >= connection.last_sync);

    assert!(page.disconnect_analytics());
    assert!(page.connection().is_none());
    assert_eq!(integration.load(), None);
}

#[tokio::test]
async fn metrics_failure_does_not_connect() {
    let backend = Arc::new(Scripted::new(&["analytics_metrics"]));
    let (integration, store) = memory_integration();
    let mut page = AnalyticsPage::mount(backend, integration).await;

    assert!(!page.connect_analytics("G-1").await);
    assert!(page.connection().is_none());
    assert_eq!(store.get(CONNECTION_KEY).unwrap(), None);
    assert!(page.notices().has_errors());
}
