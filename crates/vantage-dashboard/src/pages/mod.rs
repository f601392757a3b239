//! Page controllers.
//!
//! A page mounts by fetching everything it shows concurrently. Each fetch
//! fails independently: the failure is logged and that collection stays
//! empty, so one broken endpoint never blanks the whole page.

mod analytics;
mod projects;

pub use analytics::{AnalysisForm, AnalysisKind, AnalyticsPage, AnalyticsTab, TrainModelModal};
pub use projects::{CreateProjectModal, ProjectsPage};

use std::future::Future;

use vantage_api::ApiError;

pub(crate) async fn fetch_or_empty<T, F>(what: &'static str, fetch: F) -> Vec<T>
where
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    match fetch.await {
        Ok(items) => {
            tracing::debug!(collection = what, count = items.len(), "fetched");
            items
        }
        Err(error) => {
            tracing::warn!(collection = what, %error, "fetch failed, showing empty");
            Vec::new()
        }
    }
}
