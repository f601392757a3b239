//! Payloads sent to the backend by page actions.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ModelType;

/// Body of `POST projects/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Body of `POST analytics/models/train/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrainModelRequest {
    pub name: String,
    pub model_type: ModelType,
}

/// Body of `POST analytics/seo/run/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeoAnalysisRequest {
    pub domain: String,
}

/// Body of `POST analytics/swot/run/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SwotAnalysisRequest {
    pub business_name: String,
    pub period: String,
}

/// Body of `POST analytics/industry/run/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IndustryAnalysisRequest {
    pub industry: String,
}

/// Body of `POST agents/{slug}/ask/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
}
