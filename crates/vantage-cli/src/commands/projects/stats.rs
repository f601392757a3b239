use serde::Serialize;
use vantage_dashboard::view::format_percent;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::pages;
use crate::context::AppContext;
use crate::output::output;

/// Display form of the portfolio stats for the table layout.
#[derive(Debug, Serialize)]
struct StatsView {
    total: usize,
    active: usize,
    at_risk: usize,
    completed: usize,
    overdue: usize,
    total_budget: String,
    total_actual_cost: String,
    budget_variance: String,
    average_progress: String,
    average_health: String,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = pages::projects(ctx).await;
    let stats = page.stats();

    if flags.format != OutputFormat::Table {
        return output(&stats, flags.format);
    }

    let view = StatsView {
        total: stats.total,
        active: stats.active,
        at_risk: stats.at_risk,
        completed: stats.completed,
        overdue: stats.overdue,
        total_budget: ctx.view.format_currency(stats.total_budget),
        total_actual_cost: ctx.view.format_currency(stats.total_actual_cost),
        budget_variance: ctx.view.format_currency(stats.budget_variance),
        average_progress: format_percent(stats.average_progress),
        average_health: format!("{:.0}", stats.average_health),
    };
    output(&view, flags.format)
}
