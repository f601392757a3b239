use serde::Serialize;
use vantage_core::entities::Project;
use vantage_core::filter::{ProjectSort, StatusFilter};
use vantage_dashboard::view::ProjectRow;

use crate::cli::GlobalFlags;
use crate::commands::shared::{notices, pages};
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::output_rows;

#[derive(Debug, Serialize)]
struct ProjectListResponse<'a> {
    projects: Vec<&'a Project>,
    /// Matches before the limit was applied.
    total: usize,
}

pub async fn run(
    status: Option<&str>,
    search: Option<&str>,
    sort: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|raw| parse_value::<StatusFilter>(raw, "status"))
        .transpose()?
        .unwrap_or_default();
    let sort = sort
        .map(|raw| parse_value::<ProjectSort>(raw, "sort"))
        .transpose()?
        .unwrap_or_default();
    let limit = ctx.limit(limit, flags);

    let mut page = pages::projects(ctx).await;
    page.set_status_filter(status);
    page.set_search(search.unwrap_or_default());
    page.set_sort(sort);

    let mut projects = page.visible_projects();
    let total = projects.len();
    projects.truncate(limit);

    let rows = projects
        .iter()
        .map(|project| ctx.view.project_row(project))
        .collect::<Vec<ProjectRow>>();
    output_rows(&ProjectListResponse { projects, total }, &rows, flags.format)?;
    notices::flush(page.notices_mut());
    Ok(())
}
