mod create;
mod list;
mod show;
mod stats;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

/// Handle `vtg projects`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List {
            status,
            search,
            sort,
            limit,
        } => {
            list::run(
                status.as_deref(),
                search.as_deref(),
                sort.as_deref(),
                *limit,
                ctx,
                flags,
            )
            .await
        }
        ProjectCommands::Show { id } => show::run(id, ctx, flags).await,
        ProjectCommands::Stats => stats::run(ctx, flags).await,
        ProjectCommands::Create {
            name,
            description,
            code,
            budget,
            start,
            end,
        } => {
            create::run(
                create::CreateArgs {
                    name,
                    description: description.as_deref(),
                    code: code.as_deref(),
                    budget: *budget,
                    start: start.as_deref(),
                    end: end.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
    }
}
