//! Deterministic synthetic data for the demo backend.
//!
//! Everything is derived from fixed tables plus the current date, so a demo
//! session always shows the same projects with dates that stay relative to
//! today.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use vantage_core::entities::{
    AgentProfile, AnalyticsMetrics, AnalyticsModel, IndustryAnalysis, Insight, Project,
    ProjectManager, ProjectRisk, Recommendation, SearchConsoleStats, SeoAnalysis, SwotAnalysis,
    TeamMember,
};
use vantage_core::enums::{
    AgentKind, ModelType, Priority, ProjectStatus, RiskLevel, RiskRating, RiskStatus,
};

struct ProjectSeed {
    name: &'static str,
    description: &'static str,
    status: ProjectStatus,
    start_offset_days: i64,
    length_days: i64,
    budget: f64,
    spent_ratio: f64,
    progress: f64,
    health: f64,
    risk: RiskLevel,
}

const PROJECT_SEEDS: &[ProjectSeed] = &[
    ProjectSeed {
        name: "Website Relaunch",
        description: "Rebuild the marketing site on the new design system",
        status: ProjectStatus::Active,
        start_offset_days: -60,
        length_days: 120,
        budget: 85_000.0,
        spent_ratio: 0.48,
        progress: 55.0,
        health: 82.0,
        risk: RiskLevel::Low,
    },
    ProjectSeed {
        name: "CRM Migration",
        description: "Move the sales pipeline from spreadsheets to the CRM",
        status: ProjectStatus::AtRisk,
        start_offset_days: -150,
        length_days: 130,
        budget: 140_000.0,
        spent_ratio: 0.97,
        progress: 71.0,
        health: 41.0,
        risk: RiskLevel::High,
    },
    ProjectSeed {
        name: "Q4 Paid Social Campaign",
        description: "Holiday campaign across paid social channels",
        status: ProjectStatus::Draft,
        start_offset_days: 20,
        length_days: 75,
        budget: 60_000.0,
        spent_ratio: 0.0,
        progress: 0.0,
        health: 90.0,
        risk: RiskLevel::Medium,
    },
    ProjectSeed {
        name: "Customer Portal",
        description: "Self-service billing and support portal",
        status: ProjectStatus::Completed,
        start_offset_days: -300,
        length_days: 200,
        budget: 210_000.0,
        spent_ratio: 0.92,
        progress: 100.0,
        health: 95.0,
        risk: RiskLevel::Low,
    },
    ProjectSeed {
        name: "Data Warehouse",
        description: "Consolidate analytics sources into one warehouse",
        status: ProjectStatus::OnHold,
        start_offset_days: -90,
        length_days: 180,
        budget: 175_000.0,
        spent_ratio: 0.31,
        progress: 28.0,
        health: 58.0,
        risk: RiskLevel::Medium,
    },
    ProjectSeed {
        name: "Brand Refresh",
        description: "Logo, palette and tone-of-voice update",
        status: ProjectStatus::Cancelled,
        start_offset_days: -120,
        length_days: 60,
        budget: 40_000.0,
        spent_ratio: 0.22,
        progress: 15.0,
        health: 20.0,
        risk: RiskLevel::Critical,
    },
];

const MANAGERS: &[(&str, &str)] = &[
    ("Morgan Lee", "morgan.lee@example.com"),
    ("Priya Shah", "priya.shah@example.com"),
    ("Jordan Alvarez", "jordan.alvarez@example.com"),
];

const MEMBERS: &[(&str, &str, &str, &[&str])] = &[
    ("Alex", "Kim", "Frontend Engineer", &["react", "typescript"]),
    ("Sam", "Rivera", "Designer", &["figma", "branding"]),
    ("Taylor", "Nguyen", "Data Analyst", &["sql", "python"]),
    ("Casey", "Okafor", "Backend Engineer", &["rust", "postgres"]),
];

/// Projects with team, risks, and recommendations, dated relative to `today`.
#[must_use]
pub fn projects(today: NaiveDate) -> Vec<Project> {
    PROJECT_SEEDS
        .iter()
        .enumerate()
        .map(|(idx, seed)| project_from_seed(idx, seed, today))
        .collect()
}

fn project_from_seed(idx: usize, seed: &ProjectSeed, today: NaiveDate) -> Project {
    let start_date = today + Duration::days(seed.start_offset_days);
    let end_date = start_date + Duration::days(seed.length_days);
    let finished = matches!(
        seed.status,
        ProjectStatus::Completed | ProjectStatus::Cancelled
    );
    let (manager_name, manager_email) = MANAGERS[idx % MANAGERS.len()];

    Project {
        id: format!("prj-{:03}", idx + 1),
        name: seed.name.to_string(),
        description: seed.description.to_string(),
        code: format!("PRJ-{:03}", idx + 1),
        manager: Some(ProjectManager {
            id: format!("usr-{:02}", idx % MANAGERS.len() + 1),
            name: manager_name.to_string(),
            email: Some(manager_email.to_string()),
        }),
        start_date,
        end_date: Some(end_date),
        status: seed.status,
        budget: seed.budget,
        actual_cost: (seed.budget * seed.spent_ratio).round(),
        progress_percentage: seed.progress,
        health_score: seed.health,
        risk_level: seed.risk,
        is_overdue: !finished && end_date < today,
        team_members: team_for(idx),
        risks: risks_for(idx, seed.risk),
        recommendations: recommendations_for(idx, seed),
    }
}

fn team_for(idx: usize) -> Vec<TeamMember> {
    (0..=idx % 3)
        .map(|offset| {
            let (first, last, role, skills) = MEMBERS[(idx + offset) % MEMBERS.len()];
            #[allow(clippy::cast_precision_loss)]
            let assigned = 20.0 + 6.0 * ((idx + offset) % 4) as f64;
            TeamMember {
                id: format!("tm-{:02}{}", idx + 1, offset),
                first_name: first.to_string(),
                last_name: last.to_string(),
                role: role.to_string(),
                capacity_hours: 40.0,
                assigned_hours: assigned,
                skills: skills.iter().map(|s| (*s).to_string()).collect::<BTreeSet<_>>(),
            }
        })
        .collect()
}

fn risks_for(idx: usize, level: RiskLevel) -> Vec<ProjectRisk> {
    let (probability, impact) = match level {
        RiskLevel::Low | RiskLevel::Unknown => (RiskRating::Low, RiskRating::Medium),
        RiskLevel::Medium => (RiskRating::Medium, RiskRating::Medium),
        RiskLevel::High | RiskLevel::Critical => (RiskRating::High, RiskRating::High),
    };
    vec![
        ProjectRisk {
            id: format!("rsk-{:02}1", idx + 1),
            title: "Key vendor delivery slips".to_string(),
            probability,
            impact,
            status: RiskStatus::Active,
        },
        ProjectRisk {
            id: format!("rsk-{:02}2", idx + 1),
            title: "Scope creep from stakeholder requests".to_string(),
            probability: RiskRating::Medium,
            impact: RiskRating::Low,
            status: RiskStatus::Mitigated,
        },
    ]
}

fn recommendations_for(idx: usize, seed: &ProjectSeed) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    if seed.spent_ratio > 0.9 && seed.progress < 100.0 {
        recs.push(Recommendation {
            id: format!("rec-{:02}1", idx + 1),
            recommendation_type: "budget".to_string(),
            title: "Review remaining budget".to_string(),
            description: "Spend is ahead of delivered progress".to_string(),
            priority: Priority::Critical,
            confidence_score: 0.91,
        });
    }
    if seed.health < 60.0 {
        recs.push(Recommendation {
            id: format!("rec-{:02}2", idx + 1),
            recommendation_type: "schedule".to_string(),
            title: "Re-baseline the schedule".to_string(),
            description: "Health has dropped below the warning threshold".to_string(),
            priority: Priority::High,
            confidence_score: 0.78,
        });
    }
    recs
}

/// Project built from a create request, as the backend would echo it.
#[must_use]
pub fn project_from_request(
    id: String,
    request: &vantage_core::entities::NewProject,
    today: NaiveDate,
) -> Project {
    let code = if request.code.trim().is_empty() {
        id.to_uppercase()
    } else {
        request.code.clone()
    };
    Project {
        id,
        name: request.name.trim().to_string(),
        description: request.description.clone(),
        code,
        manager: None,
        start_date: request.start_date.unwrap_or(today),
        end_date: request.end_date,
        status: ProjectStatus::Draft,
        budget: request.budget,
        actual_cost: 0.0,
        progress_percentage: 0.0,
        health_score: 100.0,
        risk_level: RiskLevel::Low,
        is_overdue: false,
        team_members: Vec::new(),
        risks: Vec::new(),
        recommendations: Vec::new(),
    }
}

/// Insights with a spread of types and scores.
#[must_use]
pub fn insights(now: DateTime<Utc>) -> Vec<Insight> {
    let rows: &[(&str, &str, &str, f64, f64, &[&str])] = &[
        (
            "trend",
            "Organic traffic up 18% week over week",
            "Growth is concentrated on the pricing and comparison pages",
            0.87,
            0.62,
            &["Expand comparison content", "Add pricing FAQ schema"],
        ),
        (
            "anomaly",
            "Checkout abandonment spiked on mobile",
            "Abandonment rose from 61% to 74% after the last release",
            0.93,
            0.88,
            &["Audit the mobile checkout form", "Roll back the address widget"],
        ),
        (
            "opportunity",
            "Email segment with high repeat purchase rate",
            "Customers acquired via webinars buy again 2.3x more often",
            0.71,
            0.54,
            &["Create a webinar nurture sequence"],
        ),
        (
            "risk",
            "Paid search CPC rising faster than conversion value",
            "Blended CPC increased 27% this month",
            0.66,
            0.47,
            &["Shift budget to long-tail keywords", "Tighten negative keyword list"],
        ),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(idx, (kind, title, description, confidence, impact, recs))| Insight {
                id: format!("ins-{:03}", idx + 1),
                insight_type: (*kind).to_string(),
                title: (*title).to_string(),
                description: (*description).to_string(),
                confidence_score: *confidence,
                impact_score: *impact,
                recommendations: recs.iter().map(|r| (*r).to_string()).collect(),
                is_actioned: false,
                created_at: now - Duration::hours(6 * i64::try_from(idx).unwrap_or(0)),
            },
        )
        .collect()
}

/// A handful of trained and untrained models.
#[must_use]
pub fn models(now: DateTime<Utc>) -> Vec<AnalyticsModel> {
    vec![
        AnalyticsModel {
            id: "mdl-001".to_string(),
            name: "Churn Predictor".to_string(),
            model_type: ModelType::Classification,
            performance_metrics: BTreeMap::from([
                ("accuracy".to_string(), 0.91),
                ("precision".to_string(), 0.88),
                ("recall".to_string(), 0.84),
            ]),
            is_active: true,
            last_trained: Some(now - Duration::days(3)),
        },
        AnalyticsModel {
            id: "mdl-002".to_string(),
            name: "Revenue Forecast".to_string(),
            model_type: ModelType::TimeSeries,
            performance_metrics: BTreeMap::from([
                ("mape".to_string(), 0.07),
                ("rmse".to_string(), 1840.0),
            ]),
            is_active: true,
            last_trained: Some(now - Duration::days(10)),
        },
        AnalyticsModel {
            id: "mdl-003".to_string(),
            name: "Traffic Anomaly Detector".to_string(),
            model_type: ModelType::AnomalyDetection,
            performance_metrics: BTreeMap::new(),
            is_active: false,
            last_trained: None,
        },
    ]
}

/// Metrics reported right after a model is trained.
#[must_use]
pub fn trained_metrics(model_type: ModelType, seed: u64) -> BTreeMap<String, f64> {
    let delta = jitter(seed, 0.08);
    match model_type {
        ModelType::Classification | ModelType::Predictive => BTreeMap::from([
            ("accuracy".to_string(), round3(0.84 + delta)),
            ("f1".to_string(), round3(0.80 + delta)),
        ]),
        ModelType::Regression | ModelType::TimeSeries => BTreeMap::from([
            ("r2".to_string(), round3(0.78 + delta)),
            ("mape".to_string(), round3(0.12 - delta / 2.0)),
        ]),
        ModelType::Clustering => BTreeMap::from([("silhouette".to_string(), round3(0.55 + delta))]),
        ModelType::AnomalyDetection => {
            BTreeMap::from([("precision".to_string(), round3(0.81 + delta))])
        }
    }
}

#[must_use]
pub fn seo_analysis(id: String, domain: &str, now: DateTime<Utc>) -> SeoAnalysis {
    let seed = seed_of(domain);
    let impressions = 20_000 + seed % 80_000;
    let clicks = impressions * (2 + seed % 5) / 100;
    #[allow(clippy::cast_precision_loss)]
    let ctr = clicks as f64 / impressions as f64;
    SeoAnalysis {
        id,
        domain: domain.to_string(),
        created_at: now,
        search_console: SearchConsoleStats {
            clicks,
            impressions,
            ctr: round3(ctr),
            average_position: round3(6.0 + jitter(seed, 8.0).abs()),
        },
        top_keywords: vec![
            format!("{} pricing", domain_stem(domain)),
            format!("{} reviews", domain_stem(domain)),
            format!("best {} alternative", domain_stem(domain)),
        ],
        details: serde_json::json!({
            "pages_crawled": 120 + seed % 400,
            "broken_links": seed % 12,
            "mobile_friendly": true,
        }),
    }
}

#[must_use]
pub fn swot_analysis(
    id: String,
    business_name: &str,
    period: &str,
    now: DateTime<Utc>,
) -> SwotAnalysis {
    SwotAnalysis {
        id,
        business_name: business_name.to_string(),
        period: period.to_string(),
        created_at: now,
        strengths: vec![
            "Strong brand recognition in core segment".to_string(),
            "High customer retention".to_string(),
        ],
        weaknesses: vec![
            "Limited presence on mobile channels".to_string(),
            "Long sales cycle for enterprise deals".to_string(),
        ],
        opportunities: vec![
            "Partnerships with complementary SaaS vendors".to_string(),
            "Expansion into adjacent mid-market verticals".to_string(),
        ],
        threats: vec![
            "Aggressive pricing from new entrants".to_string(),
            "Rising paid acquisition costs".to_string(),
        ],
    }
}

#[must_use]
pub fn industry_analysis(id: String, industry: &str, now: DateTime<Utc>) -> IndustryAnalysis {
    let seed = seed_of(industry);
    #[allow(clippy::cast_precision_loss)]
    let market_size = (5 + seed % 95) as f64 * 1_000_000_000.0;
    IndustryAnalysis {
        id,
        industry: industry.to_string(),
        created_at: now,
        market_size,
        growth_rate: round3(0.06 + jitter(seed, 0.05)),
        key_players: vec![
            format!("{} Leaders Inc.", title_case(industry)),
            "Northwind Holdings".to_string(),
            "Globex Group".to_string(),
        ],
        trends: vec![
            "Consolidation among mid-size vendors".to_string(),
            "AI-assisted workflows becoming table stakes".to_string(),
        ],
    }
}

/// Metrics for a Google Analytics property, stable per property id.
#[must_use]
pub fn analytics_metrics(property_id: &str) -> AnalyticsMetrics {
    let seed = seed_of(property_id);
    let users = 1_000 + seed % 49_000;
    let sessions = users + users * (seed % 60) / 100;
    let pageviews = sessions * (2 + seed % 4);
    AnalyticsMetrics {
        users,
        sessions,
        pageviews,
        bounce_rate: round3(0.45 + jitter(seed, 0.15)),
        avg_session_duration: round3(120.0 + jitter(seed, 60.0)),
    }
}

/// Demo persona for each page's agent.
#[must_use]
pub fn agent_profile(kind: AgentKind) -> AgentProfile {
    match kind {
        AgentKind::Projects => AgentProfile {
            id: "agent-atlas".to_string(),
            name: "Atlas".to_string(),
            role: "Project management".to_string(),
            description: "Answers questions about schedules, budgets and risks.".to_string(),
            capabilities: vec![
                "Risk assessment".to_string(),
                "Resource planning".to_string(),
                "Status reporting".to_string(),
            ],
        },
        AgentKind::Analytics => AgentProfile {
            id: "agent-nova".to_string(),
            name: "Nova".to_string(),
            role: "Marketing analytics".to_string(),
            description: "Explains traffic, campaign and model results.".to_string(),
            capabilities: vec![
                "Traffic analysis".to_string(),
                "SEO review".to_string(),
                "Forecasting".to_string(),
            ],
        },
    }
}

/// Canned answer for the demo agents.
#[must_use]
pub fn agent_answer(kind: AgentKind, question: &str) -> String {
    let topic = question.trim().trim_end_matches('?');
    match kind {
        AgentKind::Projects => format!(
            "Looking at the current portfolio for \"{topic}\": CRM Migration is the main concern, \
             with spend at 97% of budget and health at 41. I'd re-baseline its schedule first."
        ),
        AgentKind::Analytics => format!(
            "On \"{topic}\": organic traffic is trending up 18% week over week, \
             while mobile checkout abandonment needs attention."
        ),
    }
}

/// FNV-1a over the bytes of `text`. Stable across runs and platforms.
fn seed_of(text: &str) -> u64 {
    text.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// Deterministic value in `[-spread, spread]`.
fn jitter(seed: u64, spread: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let unit = (seed % 10_000) as f64 / 10_000.0;
    (unit * 2.0 - 1.0) * spread
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn domain_stem(domain: &str) -> &str {
    let host = domain
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");
    host.split(['.', '/']).next().unwrap_or(host)
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
