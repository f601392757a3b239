use std::collections::BTreeSet;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, ProjectStatus, RiskLevel, RiskRating, RiskStatus};

/// A managed project with its team, risks, and backend recommendations.
///
/// `progress_percentage` and `health_score` are 0–100 by contract of the
/// producer; nothing here validates them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub manager: Option<ProjectManager>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub actual_cost: f64,
    #[serde(default)]
    pub progress_percentage: f64,
    #[serde(default)]
    pub health_score: f64,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub is_overdue: bool,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub risks: Vec<ProjectRisk>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Project {
    /// Budget minus actual cost. Negative means over budget.
    #[must_use]
    pub fn budget_remaining(&self) -> f64 {
        self.budget - self.actual_cost
    }

    /// Risks that are still being tracked.
    pub fn open_risks(&self) -> impl Iterator<Item = &ProjectRisk> {
        self.risks.iter().filter(|risk| risk.status == RiskStatus::Active)
    }
}

/// The person accountable for a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectManager {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A member of a project team and their allocation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(default)]
    pub capacity_hours: f64,
    #[serde(default)]
    pub assigned_hours: f64,
    #[serde(default)]
    pub skills: BTreeSet<String>,
}

impl TeamMember {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Assigned hours as a share of capacity, in percent. Zero capacity
    /// reports 0 rather than dividing by zero.
    #[must_use]
    pub fn utilization(&self) -> f64 {
        if self.capacity_hours <= 0.0 {
            return 0.0;
        }
        self.assigned_hours / self.capacity_hours * 100.0
    }
}

/// A single tracked risk on a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectRisk {
    pub id: String,
    pub title: String,
    pub probability: RiskRating,
    pub impact: RiskRating,
    pub status: RiskStatus,
}

/// A backend-generated suggestion attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub recommendation_type: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    #[serde(default)]
    pub confidence_score: f64,
}
