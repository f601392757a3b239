//! Project list filtering, sorting, and summary statistics.
//!
//! Everything here is pure: functions borrow the fetched collection and return
//! a derived view without mutating it.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Project;
use crate::enums::ProjectStatus;
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// Status selector of the projects list: `all` or exactly one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        raw.parse::<ProjectStatus>().map(Self::Only)
    }
}

impl From<ProjectStatus> for StatusFilter {
    fn from(status: ProjectStatus) -> Self {
        Self::Only(status)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the projects whose status matches `status` and whose name or
/// description contains `query`, ignoring case.
///
/// Input order is preserved. The query is used as typed, so surrounding
/// whitespace is significant. An empty query matches every project.
#[must_use]
pub fn filter_projects<'a>(
    projects: &'a [Project],
    status: StatusFilter,
    query: &str,
) -> Vec<&'a Project> {
    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|project| status.matches(project.status))
        .filter(|project| matches_query(project, &needle))
        .collect()
}

fn matches_query(project: &Project, needle: &str) -> bool {
    needle.is_empty()
        || project.name.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Ordering applied to the visible project list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSort {
    /// Keep the order the backend returned.
    #[default]
    Input,
    /// Name, A→Z.
    Name,
    /// Health score, lowest first.
    Health,
    /// Progress, highest first.
    Progress,
    /// End date, soonest first; projects without one go last.
    EndDate,
    /// Budget, largest first.
    Budget,
}

impl ProjectSort {
    pub const ALL: &'static [Self] = &[
        Self::Input,
        Self::Name,
        Self::Health,
        Self::Progress,
        Self::EndDate,
        Self::Budget,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Name => "name",
            Self::Health => "health",
            Self::Progress => "progress",
            Self::EndDate => "end_date",
            Self::Budget => "budget",
        }
    }
}

impl fmt::Display for ProjectSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectSort {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|sort| sort.as_str() == normalized)
            .ok_or_else(|| CoreError::InvalidValue {
                field: "sort".to_string(),
                value: raw.to_string(),
            })
    }
}

/// Sort a filtered view in place. The sort is stable, so ties keep their
/// input order.
pub fn sort_projects(projects: &mut [&Project], sort: ProjectSort) {
    match sort {
        ProjectSort::Input => {}
        ProjectSort::Name => {
            projects.sort_by_key(|project| project.name.to_lowercase());
        }
        ProjectSort::Health => {
            projects.sort_by(|a, b| a.health_score.total_cmp(&b.health_score));
        }
        ProjectSort::Progress => {
            projects.sort_by(|a, b| b.progress_percentage.total_cmp(&a.progress_percentage));
        }
        ProjectSort::Budget => {
            projects.sort_by(|a, b| b.budget.total_cmp(&a.budget));
        }
        ProjectSort::EndDate => {
            projects.sort_by(|a, b| match (a.end_date, b.end_date) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Summary cards shown above the projects list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectStats {
    pub total: usize,
    pub active: usize,
    pub at_risk: usize,
    pub completed: usize,
    pub overdue: usize,
    pub total_budget: f64,
    pub total_actual_cost: f64,
    /// `total_budget - total_actual_cost`.
    pub budget_variance: f64,
    pub average_progress: f64,
    pub average_health: f64,
}

impl ProjectStats {
    /// Compute stats over a collection. Averages are 0 for an empty slice.
    #[must_use]
    pub fn from_projects<'a, I>(projects: I) -> Self
    where
        I: IntoIterator<Item = &'a Project>,
    {
        let mut stats = Self::default();
        let mut progress_sum = 0.0;
        let mut health_sum = 0.0;

        for project in projects {
            stats.total += 1;
            match project.status {
                ProjectStatus::Active => stats.active += 1,
                ProjectStatus::AtRisk => stats.at_risk += 1,
                ProjectStatus::Completed => stats.completed += 1,
                ProjectStatus::Draft
                | ProjectStatus::OnHold
                | ProjectStatus::Cancelled
                | ProjectStatus::Unknown => {}
            }
            if project.is_overdue {
                stats.overdue += 1;
            }
            stats.total_budget += project.budget;
            stats.total_actual_cost += project.actual_cost;
            progress_sum += project.progress_percentage;
            health_sum += project.health_score;
        }

        stats.budget_variance = stats.total_budget - stats.total_actual_cost;
        if stats.total > 0 {
            #[allow(clippy::cast_precision_loss)]
            let count = stats.total as f64;
            stats.average_progress = progress_sum / count;
            stats.average_health = health_sum / count;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::enums::RiskLevel;

    fn mk(id: &str, name: &str, description: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            code: id.to_uppercase(),
            manager: None,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: None,
            status,
            budget: 0.0,
            actual_cost: 0.0,
            progress_percentage: 0.0,
            health_score: 0.0,
            risk_level: RiskLevel::Low,
            is_overdue: false,
            team_members: Vec::new(),
            risks: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    fn alpha_beta() -> Vec<Project> {
        vec![
            mk("p1", "Alpha", "", ProjectStatus::Active),
            mk("p2", "Beta", "", ProjectStatus::Completed),
        ]
    }

    fn ids(view: &[&Project]) -> Vec<String> {
        view.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn status_only_selects_matching() {
        let projects = alpha_beta();
        let view = filter_projects(&projects, StatusFilter::Only(ProjectStatus::Active), "");
        assert_eq!(ids(&view), vec!["p1"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let projects = alpha_beta();
        let view = filter_projects(&projects, StatusFilter::All, "beta");
        assert_eq!(ids(&view), vec!["p2"]);
    }

    #[test]
    fn all_with_empty_query_is_identity() {
        let projects = alpha_beta();
        let view: Vec<Project> = filter_projects(&projects, StatusFilter::All, "")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(view, projects);
    }

    #[rstest]
    #[case(StatusFilter::All, "")]
    #[case(StatusFilter::Only(ProjectStatus::Draft), "x")]
    #[case(StatusFilter::Only(ProjectStatus::Active), "")]
    fn empty_input_yields_empty(#[case] status: StatusFilter, #[case] query: &str) {
        assert!(filter_projects(&[], status, query).is_empty());
    }

    #[test]
    fn query_matches_description_and_preserves_order() {
        let projects = vec![
            mk("p1", "CRM", "Sales pipeline revamp", ProjectStatus::Active),
            mk("p2", "Website", "Marketing site", ProjectStatus::Active),
            mk("p3", "Pipeline", "", ProjectStatus::OnHold),
        ];
        let view = filter_projects(&projects, StatusFilter::All, "PIPELINE");
        assert_eq!(ids(&view), vec!["p1", "p3"]);
    }

    #[test]
    fn leading_space_in_query_is_not_trimmed() {
        let projects = vec![mk("p1", "ax", "", ProjectStatus::Active)];
        assert!(filter_projects(&projects, StatusFilter::All, " x").is_empty());
        assert_eq!(ids(&filter_projects(&projects, StatusFilter::All, "x")), vec!["p1"]);
    }

    #[test]
    fn unknown_status_shows_under_all_only() {
        let projects = vec![
            mk("p1", "A", "", ProjectStatus::Active),
            mk("p2", "B", "", ProjectStatus::Unknown),
        ];
        let all = filter_projects(&projects, StatusFilter::All, "");
        assert_eq!(ids(&all), vec!["p1", "p2"]);
        let active = filter_projects(&projects, StatusFilter::Only(ProjectStatus::Active), "");
        assert_eq!(ids(&active), vec!["p1"]);
    }

    #[test]
    fn status_and_query_combine() {
        let projects = vec![
            mk("p1", "Alpha one", "", ProjectStatus::Active),
            mk("p2", "Alpha two", "", ProjectStatus::Completed),
            mk("p3", "Gamma", "", ProjectStatus::Active),
        ];
        let view = filter_projects(&projects, ProjectStatus::Active.into(), "alpha");
        assert_eq!(ids(&view), vec!["p1"]);
    }

    #[rstest]
    #[case("all", StatusFilter::All)]
    #[case("ALL", StatusFilter::All)]
    #[case("on-hold", StatusFilter::Only(ProjectStatus::OnHold))]
    #[case("at_risk", StatusFilter::Only(ProjectStatus::AtRisk))]
    fn status_filter_parses(#[case] raw: &str, #[case] expected: StatusFilter) {
        assert_eq!(raw.parse::<StatusFilter>().unwrap(), expected);
    }

    #[test]
    fn status_filter_rejects_unknown() {
        assert!("archived".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn sort_by_end_date_puts_missing_last() {
        let mut a = mk("a", "A", "", ProjectStatus::Active);
        a.end_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        let b = mk("b", "B", "", ProjectStatus::Active);
        let mut c = mk("c", "C", "", ProjectStatus::Active);
        c.end_date = NaiveDate::from_ymd_opt(2025, 3, 1);
        let projects = vec![a, b, c];

        let mut view = filter_projects(&projects, StatusFilter::All, "");
        sort_projects(&mut view, ProjectSort::EndDate);
        assert_eq!(ids(&view), vec!["c", "a", "b"]);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut projects = vec![
            mk("p1", "One", "", ProjectStatus::Active),
            mk("p2", "Two", "", ProjectStatus::Active),
            mk("p3", "Three", "", ProjectStatus::Active),
        ];
        projects[1].health_score = 40.0;
        projects[0].health_score = 80.0;
        projects[2].health_score = 80.0;

        let mut view = filter_projects(&projects, StatusFilter::All, "");
        sort_projects(&mut view, ProjectSort::Health);
        assert_eq!(ids(&view), vec!["p2", "p1", "p3"]);
    }

    #[test]
    fn stats_over_mixed_collection() {
        let mut projects = vec![
            mk("p1", "A", "", ProjectStatus::Active),
            mk("p2", "B", "", ProjectStatus::AtRisk),
            mk("p3", "C", "", ProjectStatus::Completed),
            mk("p4", "D", "", ProjectStatus::Draft),
        ];
        for (i, project) in projects.iter_mut().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let step = (i + 1) as f64;
            project.budget = 1000.0 * step;
            project.actual_cost = 500.0 * step;
            project.progress_percentage = 20.0 * step;
            project.health_score = 50.0;
        }
        projects[1].is_overdue = true;

        let stats = ProjectStats::from_projects(&projects);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.at_risk, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.overdue, 1);
        assert!((stats.total_budget - 10_000.0).abs() < f64::EPSILON);
        assert!((stats.budget_variance - 5_000.0).abs() < f64::EPSILON);
        assert!((stats.average_progress - 50.0).abs() < f64::EPSILON);
        assert!((stats.average_health - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_count_unknown_status_in_total_only() {
        let mut projects = vec![
            mk("p1", "A", "", ProjectStatus::Active),
            mk("p2", "B", "", ProjectStatus::Unknown),
        ];
        projects[1].budget = 2000.0;
        let stats = ProjectStats::from_projects(&projects);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.at_risk, 0);
        assert_eq!(stats.completed, 0);
        assert!((stats.total_budget - (projects[0].budget + 2000.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_of_empty_are_zero() {
        let stats = ProjectStats::from_projects(&[]);
        assert_eq!(stats, ProjectStats::default());
    }
}
