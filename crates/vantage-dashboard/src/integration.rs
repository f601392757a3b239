//! Google Analytics connection cached in the injected key/value store.
//!
//! The connection is one camelCase JSON record under
//! [`CONNECTION_KEY`]. A record that cannot be read or parsed is treated as
//! "not connected".

use std::sync::Arc;

use chrono::Utc;
use vantage_api::Backend;
use vantage_core::entities::AnalyticsConnection;
use vantage_store::KeyValueStore;

use crate::error::DashboardError;

pub const CONNECTION_KEY: &str = "google_analytics_connection";

#[derive(Clone)]
pub struct AnalyticsIntegration {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for AnalyticsIntegration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsIntegration")
            .field("store", &self.store.backend_name())
            .finish()
    }
}

impl AnalyticsIntegration {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The cached connection, if any.
    #[must_use]
    pub fn load(&self) -> Option<AnalyticsConnection> {
        let raw = match self.store.get(CONNECTION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(%error, "could not read cached analytics connection");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(connection) => Some(connection),
            Err(error) => {
                tracing::warn!(%error, "ignoring unparseable analytics connection");
                None
            }
        }
    }

    /// Fetch metrics for `property_id` and cache a fresh connection.
    ///
    /// # Errors
    ///
    /// [`DashboardError::Validation`] for a blank property id; backend and
    /// store failures otherwise. Nothing is cached on error.
    pub async fn connect<B: Backend>(
        &self,
        backend: &B,
        property_id: &str,
    ) -> Result<AnalyticsConnection, DashboardError> {
        let property_id = property_id.trim();
        if property_id.is_empty() {
            return Err(DashboardError::Validation(
                "Property ID is required".to_string(),
            ));
        }
        let metrics = backend.analytics_metrics(property_id).await?;
        let connection = AnalyticsConnection {
            property_id: property_id.to_string(),
            is_connected: true,
            last_sync: Utc::now(),
            metrics,
        };
        self.save(&connection)?;
        Ok(connection)
    }

    /// Re-fetch metrics for the cached property and bump `lastSync`.
    ///
    /// # Errors
    ///
    /// [`DashboardError::Validation`] when nothing is connected; backend and
    /// store failures otherwise. The cached record is untouched on error.
    pub async fn refresh<B: Backend>(
        &self,
        backend: &B,
    ) -> Result<AnalyticsConnection, DashboardError> {
        let Some(mut connection) = self.load() else {
            return Err(DashboardError::Validation(
                "Google Analytics is not connected".to_string(),
            ));
        };
        connection.metrics = backend.analytics_metrics(&connection.property_id).await?;
        connection.last_sync = Utc::now();
        connection.is_connected = true;
        self.save(&connection)?;
        Ok(connection)
    }

    /// # Errors
    ///
    /// Returns the store error if the record cannot be removed.
    pub fn disconnect(&self) -> Result<(), DashboardError> {
        self.store.clear(CONNECTION_KEY)?;
        Ok(())
    }

    fn save(&self, connection: &AnalyticsConnection) -> Result<(), DashboardError> {
        let raw = serde_json::to_string(connection)?;
        self.store.set(CONNECTION_KEY, &raw)?;
        Ok(())
    }
}
