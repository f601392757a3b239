use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ModelType;

/// A trained (or training) analytics model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalyticsModel {
    pub id: String,
    pub name: String,
    pub model_type: ModelType,
    /// Loosely typed metric name → value (`accuracy`, `rmse`, ...).
    #[serde(default)]
    pub performance_metrics: BTreeMap<String, f64>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub last_trained: Option<DateTime<Utc>>,
}

impl AnalyticsModel {
    /// The metric shown on a model card: `accuracy` if present, else the
    /// first metric by name.
    #[must_use]
    pub fn headline_metric(&self) -> Option<(&str, f64)> {
        self.performance_metrics
            .get_key_value("accuracy")
            .or_else(|| self.performance_metrics.iter().next())
            .map(|(name, value)| (name.as_str(), *value))
    }
}
