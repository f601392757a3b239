use serde::Serialize;
use vantage_core::entities::AnalyticsConnection;
use vantage_dashboard::pages::AnalyticsTab;
use vantage_dashboard::view::{ViewRenderer, format_metric};

use crate::cli::subcommands::GaCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{notices, pages};
use crate::context::AppContext;
use crate::output::output;

/// Flattened connection for the key/value table layout.
#[derive(Debug, PartialEq, Serialize)]
struct ConnectionView {
    property_id: String,
    last_sync: String,
    users: u64,
    sessions: u64,
    pageviews: u64,
    bounce_rate: String,
    avg_session_duration: String,
}

impl ConnectionView {
    fn new(connection: &AnalyticsConnection, view: &ViewRenderer) -> Self {
        let metrics = &connection.metrics;
        Self {
            property_id: connection.property_id.clone(),
            last_sync: format!(
                "{} {}",
                view.format_timestamp(connection.last_sync),
                connection.last_sync.format("%H:%M UTC")
            ),
            users: metrics.users,
            sessions: metrics.sessions,
            pageviews: metrics.pageviews,
            bounce_rate: format_metric(metrics.bounce_rate),
            avg_session_duration: format!("{:.0}s", metrics.avg_session_duration),
        }
    }
}

fn print_connection(
    connection: &AnalyticsConnection,
    ctx: &AppContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => output(&ConnectionView::new(connection, &ctx.view), format),
        other => output(connection, other),
    }
}

/// Handle `vtg ga`.
pub async fn handle(
    action: &GaCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if matches!(action, GaCommands::Status) {
        // Status only reads the cache; no page mount and no requests.
        return match ctx.integration().load() {
            Some(connection) => print_connection(&connection, ctx, flags.format),
            None => {
                eprintln!("Google Analytics is not connected. Run `vtg ga connect <property-id>`.");
                Ok(())
            }
        };
    }

    let mut page = pages::analytics(ctx).await;
    page.set_tab(AnalyticsTab::Integrations);

    let changed = match action {
        GaCommands::Connect { property_id } => page.connect_analytics(property_id).await,
        GaCommands::Refresh => page.refresh_analytics().await,
        GaCommands::Disconnect => page.disconnect_analytics(),
        GaCommands::Status => false,
    };
    if changed {
        if let Some(connection) = page.connection() {
            print_connection(connection, ctx, flags.format)?;
        }
    }

    notices::flush(page.notices_mut());
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use vantage_core::entities::{AnalyticsConnection, AnalyticsMetrics};
    use vantage_dashboard::view::ViewRenderer;

    use super::ConnectionView;

    #[test]
    fn view_formats_sync_time_and_rates() {
        let connection = AnalyticsConnection {
            property_id: String::from("G-TEST"),
            is_connected: true,
            last_sync: Utc
                .with_ymd_and_hms(2025, 3, 4, 9, 30, 0)
                .single()
                .expect("valid timestamp"),
            metrics: AnalyticsMetrics {
                users: 1200,
                sessions: 1500,
                pageviews: 4200,
                bounce_rate: 0.42,
                avg_session_duration: 95.4,
            },
        };

        let view = ConnectionView::new(&connection, &ViewRenderer::default());
        assert_eq!(view.last_sync, "Mar 4, 2025 09:30 UTC");
        assert_eq!(view.bounce_rate, "42.0%");
        assert_eq!(view.avg_session_duration, "95s");
    }
}
