use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A backend-detected pattern with confidence and impact scores in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Insight {
    pub id: String,
    pub insight_type: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub confidence_score: f64,
    pub impact_score: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub is_actioned: bool,
    pub created_at: DateTime<Utc>,
}

/// Set `is_actioned` on the insight with `id`, leaving every other insight
/// and every other field untouched.
///
/// Returns `false` if no insight has that id.
pub fn mark_actioned(insights: &mut [Insight], id: &str) -> bool {
    match insights.iter_mut().find(|insight| insight.id == id) {
        Some(insight) => {
            insight.is_actioned = true;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mk(id: &str) -> Insight {
        Insight {
            id: id.to_string(),
            insight_type: "trend".into(),
            title: format!("insight {id}"),
            description: String::new(),
            confidence_score: 0.8,
            impact_score: 0.4,
            recommendations: vec!["act".into()],
            is_actioned: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn marks_only_the_target() {
        let mut insights = vec![mk("a"), mk("b"), mk("c")];
        let before = insights.clone();

        assert!(mark_actioned(&mut insights, "b"));

        assert_eq!(insights[0], before[0]);
        assert_eq!(insights[2], before[2]);
        let mut expected = before[1].clone();
        expected.is_actioned = true;
        assert_eq!(insights[1], expected);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut insights = vec![mk("a")];
        let before = insights.clone();
        assert!(!mark_actioned(&mut insights, "zzz"));
        assert_eq!(insights, before);
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let mut insights = vec![mk("a")];
        assert!(mark_actioned(&mut insights, "a"));
        assert!(mark_actioned(&mut insights, "a"));
        assert!(insights[0].is_actioned);
    }
}
