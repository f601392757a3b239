//! JSON Schema registry for Vantage entity types.
//!
//! Schemas are generated with [`schemars::schema_for!`] on construction and
//! looked up by snake_case type name (`vtg schema project`).

use std::collections::BTreeMap;

use schemars::schema_for;

use crate::entities;
use crate::filter::ProjectStats;

/// Every registered schema, keyed by type name.
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Conversion of a generated schema cannot fail, so a
/// failure is skipped rather than surfaced.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        if let Ok(value) = serde_json::to_value(schema_for!($ty)) {
            $map.insert($name, value);
        }
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = BTreeMap::new();

        register!(schemas, "project", entities::Project);
        register!(schemas, "team_member", entities::TeamMember);
        register!(schemas, "project_risk", entities::ProjectRisk);
        register!(schemas, "recommendation", entities::Recommendation);
        register!(schemas, "insight", entities::Insight);
        register!(schemas, "analytics_model", entities::AnalyticsModel);
        register!(schemas, "seo_analysis", entities::SeoAnalysis);
        register!(schemas, "swot_analysis", entities::SwotAnalysis);
        register!(schemas, "industry_analysis", entities::IndustryAnalysis);
        register!(schemas, "agent_profile", entities::AgentProfile);
        register!(schemas, "analytics_connection", entities::AnalyticsConnection);
        register!(schemas, "new_project", entities::NewProject);
        register!(schemas, "train_model_request", entities::TrainModelRequest);
        register!(schemas, "project_stats", ProjectStats);

        Self { schemas }
    }

    /// Look up a schema by type name. Hyphens are accepted for underscores.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name.replace('-', "_").as_str())
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemas.keys().copied()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
