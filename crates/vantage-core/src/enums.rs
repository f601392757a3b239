//! Status, risk, priority, and model-type enums for Vantage.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! matching the wire format of the backend API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Implements `as_str`, `Display`, `FromStr`, and an `ALL` table for a
/// unit-only enum. `FromStr` accepts hyphens in place of underscores.
///
/// An optional `other:` arm names the `#[serde(other)]` fallback variant. It
/// renders through `as_str` but is left out of `ALL`, so it never parses.
macro_rules! string_enum {
    (
        $ty:ident, $field:literal,
        { $($variant:ident => $text:literal),+ $(,)? }
        $(, other: $other:ident => $other_text:literal)? $(,)?
    ) => {
        impl $ty {
            /// Every known variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                    $(Self::$other => $other_text,)?
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == normalized)
                    .ok_or_else(|| CoreError::InvalidValue {
                        field: $field.to_string(),
                        value: raw.to_string(),
                    })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a project, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Active,
    OnHold,
    AtRisk,
    Completed,
    Cancelled,
    /// Any value this client does not recognise.
    #[serde(other)]
    Unknown,
}

string_enum!(ProjectStatus, "project status", {
    Draft => "draft",
    Active => "active",
    OnHold => "on_hold",
    AtRisk => "at_risk",
    Completed => "completed",
    Cancelled => "cancelled",
}, other: Unknown => "unknown");

impl ProjectStatus {
    /// Human label used in tables (`On Hold`, `At Risk`, ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::AtRisk => "At Risk",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Backend-computed overall risk of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
    /// Any value this client does not recognise.
    #[serde(other)]
    Unknown,
}

string_enum!(RiskLevel, "risk level", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
}, other: Unknown => "unknown");

// ---------------------------------------------------------------------------
// RiskRating
// ---------------------------------------------------------------------------

/// Probability or impact rating of an individual project risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskRating {
    Low,
    Medium,
    High,
    /// Any value this client does not recognise.
    #[serde(other)]
    Unknown,
}

string_enum!(RiskRating, "risk rating", {
    Low => "low",
    Medium => "medium",
    High => "high",
}, other: Unknown => "unknown");

// ---------------------------------------------------------------------------
// RiskStatus
// ---------------------------------------------------------------------------

/// Tracking status of an individual project risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Active,
    Mitigated,
    Closed,
    /// Any value this client does not recognise.
    #[serde(other)]
    Unknown,
}

string_enum!(RiskStatus, "risk status", {
    Active => "active",
    Mitigated => "mitigated",
    Closed => "closed",
}, other: Unknown => "unknown");

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
    /// Any value this client does not recognise.
    #[serde(other)]
    Unknown,
}

string_enum!(Priority, "priority", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
}, other: Unknown => "unknown");

// ---------------------------------------------------------------------------
// ModelType
// ---------------------------------------------------------------------------

/// Kind of analytics model the backend can train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    Predictive,
    Classification,
    Clustering,
    Regression,
    TimeSeries,
    AnomalyDetection,
}

string_enum!(ModelType, "model type", {
    Predictive => "predictive",
    Classification => "classification",
    Clustering => "clustering",
    Regression => "regression",
    TimeSeries => "time_series",
    AnomalyDetection => "anomaly_detection",
});

// ---------------------------------------------------------------------------
// AgentKind
// ---------------------------------------------------------------------------

/// Which backend agent persona a page talks to. The string form is the
/// agent's URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Projects,
    Analytics,
}

string_enum!(AgentKind, "agent", {
    Projects => "projects",
    Analytics => "analytics",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_status_serializes_snake_case() {
        let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
        assert_eq!(json, "\"on_hold\"");
        let parsed: ProjectStatus = serde_json::from_str("\"at_risk\"").unwrap();
        assert_eq!(parsed, ProjectStatus::AtRisk);
    }

    #[test]
    fn from_str_accepts_hyphens_and_case() {
        assert_eq!("On-Hold".parse::<ProjectStatus>().unwrap(), ProjectStatus::OnHold);
        assert_eq!("time-series".parse::<ModelType>().unwrap(), ModelType::TimeSeries);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "paused".parse::<ProjectStatus>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidValue { .. }));
        assert!(err.to_string().contains("paused"));
    }

    #[test]
    fn display_matches_wire_format() {
        for status in ProjectStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn unrecognised_wire_values_decode_as_unknown() {
        let status: ProjectStatus = serde_json::from_str("\"planning\"").unwrap();
        assert_eq!(status, ProjectStatus::Unknown);
        assert_eq!(status.label(), "Unknown");
        let level: RiskLevel = serde_json::from_str("\"severe\"").unwrap();
        assert_eq!(level, RiskLevel::Unknown);
        let rating: RiskRating = serde_json::from_str("\"extreme\"").unwrap();
        assert_eq!(rating, RiskRating::Unknown);
        let risk_status: RiskStatus = serde_json::from_str("\"escalated\"").unwrap();
        assert_eq!(risk_status, RiskStatus::Unknown);
        let priority: Priority = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(priority, Priority::Unknown);
    }

    #[test]
    fn unknown_is_never_parsed_from_user_input() {
        assert!(!ProjectStatus::ALL.contains(&ProjectStatus::Unknown));
        assert!("planning".parse::<ProjectStatus>().is_err());
        assert!("unknown".parse::<ProjectStatus>().is_err());
        assert!("unknown".parse::<Priority>().is_err());
        assert_eq!(ProjectStatus::Unknown.as_str(), "unknown");
    }
}
