use anyhow::bail;
use vantage_dashboard::view::{RiskRow, TeamMemberRow};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::pages;
use crate::context::AppContext;
use crate::output::{output, render, render_rows};

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = pages::projects(ctx).await;
    let Some(project) = page.projects().iter().find(|project| project.id == id) else {
        bail!("project '{id}' not found");
    };

    if flags.format != OutputFormat::Table {
        return output(project, flags.format);
    }

    let summary = render(&ctx.view.project_row(project), OutputFormat::Table)?;
    let team = project
        .team_members
        .iter()
        .map(TeamMemberRow::from)
        .collect::<Vec<_>>();
    let risks = project
        .risks
        .iter()
        .map(RiskRow::from)
        .collect::<Vec<_>>();

    println!("{summary}");
    if !project.description.is_empty() {
        println!("\n{}", project.description);
    }
    println!("\nTeam\n{}", render_rows(&team));
    println!("\nRisks\n{}", render_rows(&risks));
    if !project.recommendations.is_empty() {
        println!("\nRecommendations");
        for recommendation in &project.recommendations {
            println!("- {}", recommendation.title);
        }
    }
    Ok(())
}
