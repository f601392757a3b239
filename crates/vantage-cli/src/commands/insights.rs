use serde::Serialize;
use vantage_core::entities::Insight;
use vantage_dashboard::pages::AnalyticsTab;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InsightCommands;
use crate::commands::shared::{notices, pages};
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Debug, Serialize)]
struct InsightListResponse<'a> {
    insights: Vec<&'a Insight>,
}

#[derive(Debug, Serialize)]
struct InsightActionResponse<'a> {
    id: &'a str,
    actioned: bool,
}

/// Handle `vtg insights`.
pub async fn handle(
    action: &InsightCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut page = pages::analytics(ctx).await;
    page.set_tab(AnalyticsTab::Insights);

    match action {
        InsightCommands::List { open, limit } => {
            let limit = ctx.limit(*limit, flags);
            let insights = select(page.insights(), *open, limit);
            let rows = insights
                .iter()
                .map(|insight| ctx.view.insight_row(insight))
                .collect::<Vec<_>>();
            output_rows(&InsightListResponse { insights }, &rows, flags.format)?;
        }
        InsightCommands::Action { id } => {
            let actioned = page.mark_insight_actioned(id).await;
            if actioned {
                output(
                    &InsightActionResponse {
                        id: id.as_str(),
                        actioned,
                    },
                    flags.format,
                )?;
            }
        }
    }

    notices::flush(page.notices_mut());
    Ok(())
}

fn select(insights: &[Insight], open_only: bool, limit: usize) -> Vec<&Insight> {
    insights
        .iter()
        .filter(|insight| !open_only || !insight.is_actioned)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use vantage_core::entities::Insight;

    use super::select;

    fn mk(id: &str, actioned: bool) -> Insight {
        Insight {
            id: id.to_string(),
            insight_type: String::from("trend"),
            title: String::from("title"),
            description: String::new(),
            confidence_score: 0.8,
            impact_score: 0.5,
            recommendations: Vec::new(),
            is_actioned: actioned,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn open_filter_skips_actioned_insights() {
        let insights = vec![mk("i1", true), mk("i2", false), mk("i3", false)];
        let ids = select(&insights, true, 10)
            .into_iter()
            .map(|insight| insight.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["i2", "i3"]);
    }

    #[test]
    fn limit_applies_after_filter() {
        let insights = vec![mk("i1", false), mk("i2", false), mk("i3", false)];
        assert_eq!(select(&insights, false, 2).len(), 2);
    }
}
