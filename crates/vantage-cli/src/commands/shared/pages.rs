use std::sync::Arc;

use vantage_dashboard::pages::{AnalyticsPage, ProjectsPage};

use crate::backend::AnyBackend;
use crate::context::AppContext;
use crate::progress::Progress;

/// Mount the projects page behind a spinner.
pub async fn projects(ctx: &AppContext) -> ProjectsPage<AnyBackend> {
    let progress = Progress::spinner("Loading projects...");
    let page = ProjectsPage::mount(Arc::clone(&ctx.backend)).await;
    progress.finish_clear();
    page
}

/// Mount the analytics page behind a spinner.
pub async fn analytics(ctx: &AppContext) -> AnalyticsPage<AnyBackend> {
    let progress = Progress::spinner("Loading analytics...");
    let page = AnalyticsPage::mount(Arc::clone(&ctx.backend), ctx.integration()).await;
    progress.finish_clear();
    page
}
