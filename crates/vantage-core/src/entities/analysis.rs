use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result of an SEO analysis run for a domain.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SeoAnalysis {
    pub id: String,
    pub domain: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub search_console: SearchConsoleStats,
    #[serde(default)]
    pub top_keywords: Vec<String>,
    /// Remaining backend payload, kept for display only.
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Search-console totals for the analysed period.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchConsoleStats {
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub ctr: f64,
    #[serde(default)]
    pub average_position: f64,
}

/// SWOT quadrants for a business over a period.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SwotAnalysis {
    pub id: String,
    pub business_name: String,
    pub period: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub threats: Vec<String>,
}

/// Market overview for an industry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct IndustryAnalysis {
    pub id: String,
    pub industry: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub market_size: f64,
    /// Year-over-year growth as a fraction (`0.12` = 12%).
    #[serde(default)]
    pub growth_rate: f64,
    #[serde(default)]
    pub key_players: Vec<String>,
    #[serde(default)]
    pub trends: Vec<String>,
}
