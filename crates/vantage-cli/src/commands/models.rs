use serde::Serialize;
use vantage_core::entities::AnalyticsModel;
use vantage_core::enums::ModelType;
use vantage_dashboard::pages::AnalyticsTab;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ModelCommands;
use crate::commands::shared::parse::parse_value;
use crate::commands::shared::{notices, pages};
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Debug, Serialize)]
struct ModelListResponse<'a> {
    models: &'a [AnalyticsModel],
}

/// Handle `vtg models`.
pub async fn handle(
    action: &ModelCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Parse before mounting so a bad flag costs no requests.
    let model_type = match action {
        ModelCommands::Train { model_type, .. } => {
            Some(parse_value::<ModelType>(model_type, "model type")?)
        }
        ModelCommands::List { .. } => None,
    };

    let mut page = pages::analytics(ctx).await;
    page.set_tab(AnalyticsTab::Models);

    match action {
        ModelCommands::List { limit } => {
            let limit = ctx.limit(*limit, flags);
            let models = &page.models()[..page.models().len().min(limit)];
            let rows = models
                .iter()
                .map(|model| ctx.view.model_row(model))
                .collect::<Vec<_>>();
            output_rows(&ModelListResponse { models }, &rows, flags.format)?;
        }
        ModelCommands::Train { name, .. } => {
            page.open_train_modal();
            let modal = page.train_modal_mut();
            modal.name.clone_from(name);
            if let Some(model_type) = model_type {
                modal.model_type = model_type;
            }
            if let Some(model) = page.train_model().await {
                output(&model, flags.format)?;
            }
        }
    }

    notices::flush(page.notices_mut());
    Ok(())
}
