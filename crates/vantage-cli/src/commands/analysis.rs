use serde::Serialize;
use vantage_core::entities::{IndustryAnalysis, SeoAnalysis, SwotAnalysis};
use vantage_dashboard::pages::{AnalysisKind, AnalyticsPage, AnalyticsTab};
use vantage_dashboard::view::format_metric;

use crate::backend::AnyBackend;
use crate::cli::subcommands::{AnalysisCommands, AnalysisKindArg};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{notices, pages};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum AnalysisList<'a> {
    Seo { seo_analyses: &'a [SeoAnalysis] },
    Swot { swot_analyses: &'a [SwotAnalysis] },
    Industry { industry_analyses: &'a [IndustryAnalysis] },
}

/// Handle `vtg analysis`.
pub async fn handle(
    action: &AnalysisCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut page = pages::analytics(ctx).await;

    match action {
        AnalysisCommands::List { kind, limit } => {
            let limit = ctx.limit(*limit, flags);
            list(&page, *kind, limit, ctx, flags.format)?;
        }
        AnalysisCommands::Seo { domain } => {
            page.set_tab(AnalyticsTab::Seo);
            page.open_analysis(AnalysisKind::Seo);
            page.analysis_form_mut().domain.clone_from(domain);
            if let Some(analysis) = page.run_seo_analysis().await {
                output(&analysis, flags.format)?;
            }
        }
        AnalysisCommands::Swot { business, period } => {
            page.set_tab(AnalyticsTab::Swot);
            page.open_analysis(AnalysisKind::Swot);
            let form = page.analysis_form_mut();
            form.business_name.clone_from(business);
            form.period = period.clone().unwrap_or_default();
            if let Some(analysis) = page.run_swot_analysis().await {
                output(&analysis, flags.format)?;
            }
        }
        AnalysisCommands::Industry { industry } => {
            page.set_tab(AnalyticsTab::Industry);
            page.open_analysis(AnalysisKind::Industry);
            page.analysis_form_mut().industry.clone_from(industry);
            if let Some(analysis) = page.run_industry_analysis().await {
                output(&analysis, flags.format)?;
            }
        }
    }

    notices::flush(page.notices_mut());
    Ok(())
}

fn list(
    page: &AnalyticsPage<AnyBackend>,
    kind: AnalysisKindArg,
    limit: usize,
    ctx: &AppContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    fn head<T>(items: &[T], limit: usize) -> &[T] {
        &items[..items.len().min(limit)]
    }

    let seo = head(page.seo_analyses(), limit);
    let swot = head(page.swot_analyses(), limit);
    let industry = head(page.industry_analyses(), limit);

    if format != OutputFormat::Table {
        let list = match kind {
            AnalysisKindArg::Seo => AnalysisList::Seo { seo_analyses: seo },
            AnalysisKindArg::Swot => AnalysisList::Swot {
                swot_analyses: swot,
            },
            AnalysisKindArg::Industry => AnalysisList::Industry {
                industry_analyses: industry,
            },
        };
        return output(&list, format);
    }

    let sections = match kind {
        AnalysisKindArg::Seo => seo.iter().map(|a| seo_summary(a, ctx)).collect::<Vec<_>>(),
        AnalysisKindArg::Swot => swot.iter().map(|a| swot_summary(a, ctx)).collect(),
        AnalysisKindArg::Industry => industry
            .iter()
            .map(|a| industry_summary(a, ctx))
            .collect(),
    };
    if sections.is_empty() {
        println!("(no rows)");
    } else {
        println!("{}", sections.join("\n\n"));
    }
    Ok(())
}

fn seo_summary(analysis: &SeoAnalysis, ctx: &AppContext) -> String {
    let console = &analysis.search_console;
    format!(
        "{} ({})\n  clicks {} | impressions {} | ctr {} | avg position {:.1}\n  keywords: {}",
        analysis.domain,
        ctx.view.format_timestamp(analysis.created_at),
        console.clicks,
        console.impressions,
        format_metric(console.ctr),
        console.average_position,
        analysis.top_keywords.join(", "),
    )
}

fn swot_summary(analysis: &SwotAnalysis, ctx: &AppContext) -> String {
    let mut out = format!(
        "{} {} ({})",
        analysis.business_name,
        analysis.period,
        ctx.view.format_timestamp(analysis.created_at)
    );
    for (label, items) in [
        ("Strengths", &analysis.strengths),
        ("Weaknesses", &analysis.weaknesses),
        ("Opportunities", &analysis.opportunities),
        ("Threats", &analysis.threats),
    ] {
        out.push_str(&format!("\n  {label}: {}", items.join("; ")));
    }
    out
}

fn industry_summary(analysis: &IndustryAnalysis, ctx: &AppContext) -> String {
    format!(
        "{} ({})\n  market size {} | growth {:.1}%\n  key players: {}\n  trends: {}",
        analysis.industry,
        ctx.view.format_timestamp(analysis.created_at),
        ctx.view.format_currency(analysis.market_size),
        analysis.growth_rate * 100.0,
        analysis.key_players.join(", "),
        analysis.trends.join("; "),
    )
}
