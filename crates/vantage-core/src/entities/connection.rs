use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The cached Google Analytics connection.
///
/// This is the only locally persisted record. It is stored as one JSON blob
/// with camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConnection {
    pub property_id: String,
    pub is_connected: bool,
    pub last_sync: DateTime<Utc>,
    pub metrics: AnalyticsMetrics,
}

/// Headline traffic metrics for a property.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetrics {
    pub users: u64,
    pub sessions: u64,
    pub pageviews: u64,
    /// Fraction of single-page sessions, `0.0..=1.0`.
    pub bounce_rate: f64,
    /// Seconds.
    pub avg_session_duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let conn = AnalyticsConnection {
            property_id: "G-12345".into(),
            is_connected: true,
            last_sync: Utc::now(),
            metrics: AnalyticsMetrics {
                users: 10,
                sessions: 12,
                pageviews: 40,
                bounce_rate: 0.4,
                avg_session_duration: 95.0,
            },
        };
        let value = serde_json::to_value(&conn).unwrap();
        assert_eq!(value["propertyId"], "G-12345");
        assert_eq!(value["isConnected"], true);
        assert!(value["lastSync"].is_string());
        assert_eq!(value["metrics"]["bounceRate"], 0.4);
        assert_eq!(value["metrics"]["avgSessionDuration"], 95.0);
    }
}
