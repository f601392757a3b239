//! Pure mapping from entities to display strings and colour tokens.
//!
//! Nothing here fails: unknown tags render with [`ColorToken::Gray`] and
//! out-of-range numbers are clamped for display only.

use std::fmt::{self, Write as _};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use vantage_config::DisplayConfig;
use vantage_core::entities::{AnalyticsModel, Insight, Project, ProjectRisk, TeamMember};
use vantage_core::enums::{Priority, ProjectStatus, RiskLevel, RiskRating, RiskStatus};

// ---------------------------------------------------------------------------
// Colour tokens
// ---------------------------------------------------------------------------

/// Semantic colour of a badge. Terminals and other front-ends decide how to
/// paint each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl ColorToken {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge colours keyed by wire tag. Status, risk, priority and insight-type
/// tags share one table.
const TAG_COLORS: &[(&str, ColorToken)] = &[
    // project status
    ("draft", ColorToken::Gray),
    ("active", ColorToken::Green),
    ("on_hold", ColorToken::Yellow),
    ("at_risk", ColorToken::Orange),
    ("completed", ColorToken::Blue),
    ("cancelled", ColorToken::Red),
    // risk level, rating and priority
    ("low", ColorToken::Green),
    ("medium", ColorToken::Yellow),
    ("high", ColorToken::Orange),
    ("critical", ColorToken::Red),
    // risk status
    ("mitigated", ColorToken::Blue),
    ("closed", ColorToken::Gray),
    // insight types
    ("trend", ColorToken::Blue),
    ("opportunity", ColorToken::Green),
    ("anomaly", ColorToken::Red),
    ("risk", ColorToken::Orange),
];

/// Colour for any tag; unknown tags are gray.
#[must_use]
pub fn tag_color(tag: &str) -> ColorToken {
    let normalized = tag.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    TAG_COLORS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map_or(ColorToken::Gray, |(_, color)| *color)
}

#[must_use]
pub fn status_color(status: ProjectStatus) -> ColorToken {
    tag_color(status.as_str())
}

#[must_use]
pub fn risk_level_color(level: RiskLevel) -> ColorToken {
    tag_color(level.as_str())
}

/// Risk probability/impact. `high` is the top of this scale, so it is red.
#[must_use]
pub const fn risk_rating_color(rating: RiskRating) -> ColorToken {
    match rating {
        RiskRating::Low => ColorToken::Green,
        RiskRating::Medium => ColorToken::Yellow,
        RiskRating::High => ColorToken::Red,
        RiskRating::Unknown => ColorToken::Gray,
    }
}

#[must_use]
pub fn risk_status_color(status: RiskStatus) -> ColorToken {
    match status {
        RiskStatus::Active => ColorToken::Orange,
        other => tag_color(other.as_str()),
    }
}

#[must_use]
pub fn priority_color(priority: Priority) -> ColorToken {
    tag_color(priority.as_str())
}

/// Health score (0-100) bands.
#[must_use]
pub fn health_color(score: f64) -> ColorToken {
    match score {
        s if s >= 80.0 => ColorToken::Green,
        s if s >= 60.0 => ColorToken::Yellow,
        s if s >= 40.0 => ColorToken::Orange,
        s if s >= 0.0 => ColorToken::Red,
        _ => ColorToken::Gray,
    }
}

/// Team utilisation bands. Over-allocation is red.
#[must_use]
pub fn utilization_color(percent: f64) -> ColorToken {
    match percent {
        p if p > 100.0 => ColorToken::Red,
        p if p >= 85.0 => ColorToken::Orange,
        p if p >= 50.0 => ColorToken::Green,
        p if p >= 0.0 => ColorToken::Blue,
        _ => ColorToken::Gray,
    }
}

// ---------------------------------------------------------------------------
// Formatters
// ---------------------------------------------------------------------------

const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Formatting preferences applied to every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRenderer {
    currency_symbol: String,
    date_format: String,
}

impl Default for ViewRenderer {
    fn default() -> Self {
        Self::new("$", DEFAULT_DATE_FORMAT)
    }
}

impl ViewRenderer {
    #[must_use]
    pub fn new(currency_symbol: &str, date_format: &str) -> Self {
        Self {
            currency_symbol: currency_symbol.to_string(),
            date_format: date_format.to_string(),
        }
    }

    #[must_use]
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(&display.currency_symbol, &display.date_format)
    }

    /// `Mar 4, 2025` with the default format. A format string chrono cannot
    /// render for a date falls back to ISO-8601.
    #[must_use]
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            tracing::debug!(format = %self.date_format, "unusable date format, using ISO");
            return date.to_string();
        }
        out
    }

    #[must_use]
    pub fn format_optional_date(&self, date: Option<NaiveDate>) -> String {
        date.map_or_else(|| "-".to_string(), |d| self.format_date(d))
    }

    #[must_use]
    pub fn format_timestamp(&self, at: DateTime<Utc>) -> String {
        self.format_date(at.date_naive())
    }

    /// Whole currency units with thousands grouping: `$1,234,567`,
    /// `-$1,200`. Non-finite amounts render as `-`.
    #[must_use]
    pub fn format_currency(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return "-".to_string();
        }
        let rounded = amount.round();
        let digits = format!("{:.0}", rounded.abs());
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!("{sign}{}{}", self.currency_symbol, group_thousands(&digits))
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Score in `[0, 1]` as a whole percentage (`0.87` -> `87%`).
#[must_use]
pub fn format_score(score: f64) -> String {
    format_percent(score * 100.0)
}

/// Value already on a 0-100 scale, clamped and rounded (`55.4` -> `55%`).
#[must_use]
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{:.0}%", value.clamp(0.0, 100.0))
}

/// Model metrics are either ratios (shown as percentages) or raw errors.
#[must_use]
pub fn format_metric(value: f64) -> String {
    if (0.0..=1.0).contains(&value) {
        format!("{:.1}%", value * 100.0)
    } else {
        format!("{value:.2}")
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One display cell: text plus an optional badge colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    pub color: Option<ColorToken>,
}

impl Cell {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn badge(text: impl Into<String>, color: ColorToken) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// A row type that knows its column headers.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub status: String,
    pub status_color: ColorToken,
    pub risk: String,
    pub risk_color: ColorToken,
    pub progress: String,
    pub health: String,
    pub health_color: ColorToken,
    pub budget: String,
    pub actual_cost: String,
    pub end_date: String,
    pub overdue: bool,
    pub manager: String,
}

impl ViewRenderer {
    #[must_use]
    pub fn project_row(&self, project: &Project) -> ProjectRow {
        ProjectRow {
            id: project.id.clone(),
            code: project.code.clone(),
            name: project.name.clone(),
            status: project.status.label().to_string(),
            status_color: status_color(project.status),
            risk: project.risk_level.as_str().to_string(),
            risk_color: risk_level_color(project.risk_level),
            progress: format_percent(project.progress_percentage),
            health: format!("{:.0}", project.health_score.clamp(0.0, 100.0)),
            health_color: health_color(project.health_score),
            budget: self.format_currency(project.budget),
            actual_cost: self.format_currency(project.actual_cost),
            end_date: self.format_optional_date(project.end_date),
            overdue: project.is_overdue,
            manager: project
                .manager
                .as_ref()
                .map_or_else(|| "-".to_string(), |m| m.name.clone()),
        }
    }

    #[must_use]
    pub fn insight_row(&self, insight: &Insight) -> InsightRow {
        InsightRow {
            id: insight.id.clone(),
            insight_type: insight.insight_type.clone(),
            type_color: tag_color(&insight.insight_type),
            title: insight.title.clone(),
            confidence: format_score(insight.confidence_score),
            impact: format_score(insight.impact_score),
            created: self.format_timestamp(insight.created_at),
            actioned: insight.is_actioned,
        }
    }

    #[must_use]
    pub fn model_row(&self, model: &AnalyticsModel) -> ModelRow {
        ModelRow {
            id: model.id.clone(),
            name: model.name.clone(),
            model_type: model.model_type.as_str().to_string(),
            metric: model.headline_metric().map_or_else(
                || "-".to_string(),
                |(name, value)| format!("{name} {}", format_metric(value)),
            ),
            active: model.is_active,
            last_trained: model
                .last_trained
                .map_or_else(|| "Never".to_string(), |at| self.format_timestamp(at)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightRow {
    pub id: String,
    pub insight_type: String,
    pub type_color: ColorToken,
    pub title: String,
    pub confidence: String,
    pub impact: String,
    pub created: String,
    pub actioned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRow {
    pub id: String,
    pub name: String,
    pub model_type: String,
    pub metric: String,
    pub active: bool,
    pub last_trained: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMemberRow {
    pub name: String,
    pub role: String,
    pub utilization: String,
    pub utilization_color: ColorToken,
    pub skills: String,
}

impl From<&TeamMember> for TeamMemberRow {
    fn from(member: &TeamMember) -> Self {
        let utilization = member.utilization();
        Self {
            name: member.full_name(),
            role: member.role.clone(),
            // Over-allocation is shown as-is rather than clamped to 100%.
            utilization: if utilization.is_finite() {
                format!("{:.0}%", utilization.max(0.0))
            } else {
                "-".to_string()
            },
            utilization_color: utilization_color(utilization),
            skills: member
                .skills
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskRow {
    pub id: String,
    pub title: String,
    pub probability: String,
    pub probability_color: ColorToken,
    pub impact: String,
    pub impact_color: ColorToken,
    pub status: String,
    pub status_color: ColorToken,
}

impl From<&ProjectRisk> for RiskRow {
    fn from(risk: &ProjectRisk) -> Self {
        Self {
            id: risk.id.clone(),
            title: risk.title.clone(),
            probability: risk.probability.as_str().to_string(),
            probability_color: risk_rating_color(risk.probability),
            impact: risk.impact.as_str().to_string(),
            impact_color: risk_rating_color(risk.impact),
            status: risk.status.as_str().to_string(),
            status_color: risk_status_color(risk.status),
        }
    }
}

fn flag(on: bool, yes: &str, no: &str, yes_color: ColorToken) -> Cell {
    if on {
        Cell::badge(yes, yes_color)
    } else {
        Cell::badge(no, ColorToken::Gray)
    }
}

impl TableRow for ProjectRow {
    fn headers() -> &'static [&'static str] {
        &[
            "ID", "CODE", "NAME", "STATUS", "RISK", "PROGRESS", "HEALTH", "BUDGET", "SPENT", "END",
            "MANAGER",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        let end = if self.overdue {
            Cell::badge(format!("{} (overdue)", self.end_date), ColorToken::Red)
        } else {
            Cell::plain(&self.end_date)
        };
        vec![
            Cell::plain(&self.id),
            Cell::plain(&self.code),
            Cell::plain(&self.name),
            Cell::badge(&self.status, self.status_color),
            Cell::badge(&self.risk, self.risk_color),
            Cell::plain(&self.progress),
            Cell::badge(&self.health, self.health_color),
            Cell::plain(&self.budget),
            Cell::plain(&self.actual_cost),
            end,
            Cell::plain(&self.manager),
        ]
    }
}

impl TableRow for InsightRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "TYPE", "TITLE", "CONFIDENCE", "IMPACT", "CREATED", "STATE"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(&self.id),
            Cell::badge(&self.insight_type, self.type_color),
            Cell::plain(&self.title),
            Cell::plain(&self.confidence),
            Cell::plain(&self.impact),
            Cell::plain(&self.created),
            flag(self.actioned, "actioned", "open", ColorToken::Green),
        ]
    }
}

impl TableRow for ModelRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "TYPE", "METRIC", "STATE", "LAST TRAINED"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(&self.id),
            Cell::plain(&self.name),
            Cell::plain(&self.model_type),
            Cell::plain(&self.metric),
            flag(self.active, "active", "inactive", ColorToken::Green),
            Cell::plain(&self.last_trained),
        ]
    }
}

impl TableRow for TeamMemberRow {
    fn headers() -> &'static [&'static str] {
        &["NAME", "ROLE", "UTILIZATION", "SKILLS"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(&self.name),
            Cell::plain(&self.role),
            Cell::badge(&self.utilization, self.utilization_color),
            Cell::plain(&self.skills),
        ]
    }
}

impl TableRow for RiskRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "TITLE", "PROBABILITY", "IMPACT", "STATUS"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(&self.id),
            Cell::plain(&self.title),
            Cell::badge(&self.probability, self.probability_color),
            Cell::badge(&self.impact, self.impact_color),
            Cell::badge(&self.status, self.status_color),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1_234_567.0, "$1,234,567")]
    #[case(-1_200.0, "-$1,200")]
    #[case(0.0, "$0")]
    #[case(999.6, "$1,000")]
    #[case(100.0, "$100")]
    #[case(f64::NAN, "-")]
    fn currency(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(ViewRenderer::default().format_currency(amount), expected);
    }

    #[test]
    fn currency_uses_configured_symbol() {
        let view = ViewRenderer::new("€", DEFAULT_DATE_FORMAT);
        assert_eq!(view.format_currency(45_000.0), "€45,000");
    }

    #[test]
    fn dates_use_short_month_without_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(ViewRenderer::default().format_date(date), "Mar 4, 2025");
    }

    #[test]
    fn unrenderable_date_format_falls_back_to_iso() {
        let view = ViewRenderer::new("$", "%H:%M");
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(view.format_date(date), "2025-03-04");
    }

    #[rstest]
    #[case(0.87, "87%")]
    #[case(0.0, "0%")]
    #[case(1.0, "100%")]
    #[case(1.7, "100%")]
    #[case(-0.2, "0%")]
    fn scores(#[case] score: f64, #[case] expected: &str) {
        assert_eq!(format_score(score), expected);
    }

    #[rstest]
    #[case("active", ColorToken::Green)]
    #[case("at_risk", ColorToken::Orange)]
    #[case("On Hold", ColorToken::Yellow)]
    #[case("critical", ColorToken::Red)]
    #[case("mystery", ColorToken::Gray)]
    #[case("", ColorToken::Gray)]
    fn tag_colors(#[case] tag: &str, #[case] expected: ColorToken) {
        assert_eq!(tag_color(tag), expected);
    }

    #[test]
    fn every_status_has_a_non_gray_color_except_draft() {
        for status in ProjectStatus::ALL {
            let color = status_color(*status);
            assert_eq!(color == ColorToken::Gray, *status == ProjectStatus::Draft);
        }
    }

    #[test]
    fn unrecognised_status_renders_a_gray_row() {
        let body = r#"[
            {"id":"p1","name":"CRM","start_date":"2025-01-06",
             "status":"active","risk_level":"low"},
            {"id":"p2","name":"Intake","start_date":"2025-02-03",
             "status":"planning","risk_level":"severe"}
        ]"#;
        let projects: Vec<Project> = serde_json::from_str(body).unwrap();
        assert_eq!(projects.len(), 2);

        let view = ViewRenderer::default();
        let active = view.project_row(&projects[0]);
        assert_eq!(active.status_color, ColorToken::Green);
        let planning = view.project_row(&projects[1]);
        assert_eq!(planning.status, "Unknown");
        assert_eq!(planning.status_color, ColorToken::Gray);
        assert_eq!(planning.risk_color, ColorToken::Gray);
    }

    #[rstest]
    #[case(risk_rating_color(RiskRating::Unknown))]
    #[case(risk_status_color(RiskStatus::Unknown))]
    #[case(priority_color(Priority::Unknown))]
    #[case(risk_level_color(RiskLevel::Unknown))]
    fn unknown_variants_are_gray(#[case] color: ColorToken) {
        assert_eq!(color, ColorToken::Gray);
    }

    #[test]
    fn metrics_switch_between_ratio_and_raw() {
        assert_eq!(format_metric(0.912), "91.2%");
        assert_eq!(format_metric(1840.0), "1840.00");
    }

    #[test]
    fn team_member_row_reports_over_allocation() {
        let member = TeamMember {
            id: "tm".into(),
            first_name: "Ada".into(),
            last_name: "Byron".into(),
            role: "Analyst".into(),
            capacity_hours: 40.0,
            assigned_hours: 50.0,
            skills: ["sql".to_string(), "python".to_string()].into(),
        };
        let row = TeamMemberRow::from(&member);
        assert_eq!(row.utilization, "125%");
        assert_eq!(row.utilization_color, ColorToken::Red);
        assert_eq!(row.skills, "python, sql");
    }

    #[test]
    fn rows_have_one_cell_per_header() {
        let risk = ProjectRisk {
            id: "r".into(),
            title: "Vendor".into(),
            probability: RiskRating::High,
            impact: RiskRating::Low,
            status: RiskStatus::Active,
        };
        let row = RiskRow::from(&risk);
        assert_eq!(row.cells().len(), RiskRow::headers().len());
        assert_eq!(row.probability_color, ColorToken::Red);
        assert_eq!(row.status_color, ColorToken::Orange);
    }
}
