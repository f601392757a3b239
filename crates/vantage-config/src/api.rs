//! Backend API connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8000/api/".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request. Empty means anonymous.
    #[serde(default)]
    pub token: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Base URL with exactly one trailing slash, so relative paths join
    /// underneath it instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the URL is empty or not http(s).
    pub fn normalized_base_url(&self) -> Result<String, ConfigError> {
        let trimmed = self.base_url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("expected an http(s) URL, got '{trimmed}'"),
            });
        }
        Ok(format!("{}/", trimmed.trim_end_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api/");
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.has_token());
    }

    #[test]
    fn normalizes_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://dash.example.com/api//".into(),
            ..Default::default()
        };
        assert_eq!(
            config.normalized_base_url().unwrap(),
            "https://dash.example.com/api/"
        );

        let config = ApiConfig {
            base_url: "https://dash.example.com/api".into(),
            ..Default::default()
        };
        assert_eq!(
            config.normalized_base_url().unwrap(),
            "https://dash.example.com/api/"
        );
    }

    #[test]
    fn rejects_non_http_url() {
        let config = ApiConfig {
            base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.normalized_base_url(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
