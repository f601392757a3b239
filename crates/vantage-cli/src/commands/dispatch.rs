use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Projects { action } => commands::projects::handle(&action, ctx, flags).await,
        Commands::Insights { action } => commands::insights::handle(&action, ctx, flags).await,
        Commands::Models { action } => commands::models::handle(&action, ctx, flags).await,
        Commands::Analysis { action } => commands::analysis::handle(&action, ctx, flags).await,
        Commands::Agent { action } => commands::agent::handle(&action, ctx, flags).await,
        Commands::Ga { action } => commands::ga::handle(&action, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
