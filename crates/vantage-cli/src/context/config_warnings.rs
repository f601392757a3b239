use vantage_config::{ApiConfig, VantageConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &VantageConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VantageConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = ApiConfig::default();

    let mut warnings = Vec::new();

    let api_untouched = config.api.base_url == defaults.base_url && !config.api.has_token();
    if api_untouched && has_single_underscore_key(&env_keys, "VANTAGE_API") {
        warnings.push(
            "API config appears default while VANTAGE_API_* env vars exist. \
             Use double underscores (example: VANTAGE_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.store.dir.is_empty() && has_single_underscore_key(&env_keys, "VANTAGE_STORE") {
        warnings.push(
            "Store config appears default while VANTAGE_STORE_* env vars exist. \
             Use double underscores (example: VANTAGE_STORE__BACKEND)."
                .to_string(),
        );
    }

    let remote = config.api.base_url.trim().starts_with("https://");
    if remote && !config.api.has_token() && !config.general.demo {
        warnings.push(
            "No API token configured; requests are sent unauthenticated. \
             Set VANTAGE_API__TOKEN or pass --demo."
                .to_string(),
        );
    }

    warnings
}

/// `VANTAGE_API_BASE_URL` rather than `VANTAGE_API__BASE_URL`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_api_keys() {
        let config = VantageConfig::default();
        let warnings = collect_unconfigured_warnings(&config, env(&["VANTAGE_API_BASE_URL"]));
        assert!(warnings.iter().any(|w| w.contains("VANTAGE_API__BASE_URL")));
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let mut config = VantageConfig::default();
        config.api.token = "t".into();
        let warnings = collect_unconfigured_warnings(&config, env(&["VANTAGE_API__TOKEN"]));
        assert!(warnings.is_empty());
    }

    #[test]
    fn remote_api_without_token_warns() {
        let mut config = VantageConfig::default();
        config.api.base_url = "https://dash.example.com/api/".into();
        let warnings = collect_unconfigured_warnings(&config, env(&[]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("VANTAGE_API__TOKEN"));
    }

    #[test]
    fn demo_mode_needs_no_token() {
        let mut config = VantageConfig::default();
        config.api.base_url = "https://dash.example.com/api/".into();
        config.general.demo = true;
        assert!(collect_unconfigured_warnings(&config, env(&[])).is_empty());
    }
}
