//! Projects page: portfolio list, filters, stats, and project creation.

use std::sync::Arc;

use vantage_api::Backend;
use vantage_core::entities::{NewProject, Project};
use vantage_core::enums::AgentKind;
use vantage_core::filter::{ProjectSort, ProjectStats, StatusFilter, filter_projects, sort_projects};

use crate::agent::{AgentState, load_agent};
use crate::agent_widget::{AgentQaWidget, SubmitOutcome};
use crate::notify::Notices;
use crate::pages::fetch_or_empty;

/// Create-project dialog state.
#[derive(Debug, Clone, Default)]
pub struct CreateProjectModal {
    pub open: bool,
    pub form: NewProject,
}

#[derive(Debug)]
pub struct ProjectsPage<B> {
    backend: Arc<B>,
    projects: Vec<Project>,
    agent: AgentState,
    widget: AgentQaWidget,
    status_filter: StatusFilter,
    search: String,
    sort: ProjectSort,
    create_modal: CreateProjectModal,
    notices: Notices,
}

impl<B: Backend> ProjectsPage<B> {
    /// Load the project list and the project agent concurrently.
    pub async fn mount(backend: Arc<B>) -> Self {
        let (projects, agent) = tokio::join!(
            fetch_or_empty("projects", backend.list_projects()),
            load_agent(backend.as_ref(), AgentKind::Projects),
        );
        let widget = AgentQaWidget::new(AgentKind::Projects, &agent);
        Self {
            backend,
            projects,
            agent,
            widget,
            status_filter: StatusFilter::All,
            search: String::new(),
            sort: ProjectSort::Input,
            create_modal: CreateProjectModal::default(),
            notices: Notices::default(),
        }
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub const fn agent(&self) -> &AgentState {
        &self.agent
    }

    #[must_use]
    pub const fn widget(&self) -> &AgentQaWidget {
        &self.widget
    }

    pub const fn widget_mut(&mut self) -> &mut AgentQaWidget {
        &mut self.widget
    }

    #[must_use]
    pub const fn notices(&self) -> &Notices {
        &self.notices
    }

    pub const fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    #[must_use]
    pub const fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn sort(&self) -> ProjectSort {
        self.sort
    }

    pub const fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub const fn set_sort(&mut self, sort: ProjectSort) {
        self.sort = sort;
    }

    /// Projects matching the current filter and search, in sort order.
    #[must_use]
    pub fn visible_projects(&self) -> Vec<&Project> {
        let mut visible = filter_projects(&self.projects, self.status_filter, &self.search);
        sort_projects(&mut visible, self.sort);
        visible
    }

    /// Portfolio statistics over every fetched project, ignoring filters.
    #[must_use]
    pub fn stats(&self) -> ProjectStats {
        ProjectStats::from_projects(&self.projects)
    }

    #[must_use]
    pub const fn create_modal(&self) -> &CreateProjectModal {
        &self.create_modal
    }

    pub fn open_create_modal(&mut self) {
        self.create_modal.open = true;
    }

    pub fn close_create_modal(&mut self) {
        self.create_modal = CreateProjectModal::default();
    }

    pub const fn create_form_mut(&mut self) -> &mut NewProject {
        &mut self.create_modal.form
    }

    /// Submit the create-project form.
    ///
    /// A blank name raises a validation notice without calling the backend.
    /// On success the modal closes and the list is re-fetched; on failure the
    /// modal stays open with the form intact.
    pub async fn create_project(&mut self) -> Option<Project> {
        if self.create_modal.form.name.trim().is_empty() {
            self.notices.warning("Validation Error", "Project name is required");
            return None;
        }
        match self.backend.create_project(&self.create_modal.form).await {
            Ok(created) => {
                tracing::info!(id = %created.id, name = %created.name, "project created");
                self.notices.success(
                    "Project Created",
                    format!("{} has been created", created.name),
                );
                self.close_create_modal();
                self.refresh_projects().await;
                Some(created)
            }
            Err(error) => {
                self.notices.error(
                    "Create Failed",
                    format!("Failed to create project: {error}"),
                );
                None
            }
        }
    }

    /// Re-fetch the project list. A failure keeps the current list.
    pub async fn refresh_projects(&mut self) {
        match self.backend.list_projects().await {
            Ok(projects) => self.projects = projects,
            Err(error) => {
                tracing::warn!(%error, "failed to refresh projects");
                self.notices.error(
                    "Refresh Failed",
                    format!("Failed to load projects: {error}"),
                );
            }
        }
    }

    /// Ask the project agent `question` through the widget.
    pub async fn ask_agent(&mut self, question: &str) -> SubmitOutcome {
        self.widget.open();
        self.widget.set_draft(question);
        let backend = Arc::clone(&self.backend);
        self.widget
            .submit(|question| async move {
                backend
                    .ask_agent(AgentKind::Projects, &question)
                    .await
                    .map(|reply| reply.answer)
            })
            .await
    }
}
