//! # vantage-config
//!
//! Layered configuration loading for Vantage using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VANTAGE_*` prefix, `__` as separator)
//! 2. Project-level `.vantage/config.toml`
//! 3. User-level `~/.config/vantage/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VANTAGE_API__BASE_URL` -> `api.base_url`,
//! `VANTAGE_STORE__BACKEND` -> `store.backend`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use vantage_config::VantageConfig;
//!
//! let config = VantageConfig::load_with_dotenv().expect("config");
//! if config.general.demo {
//!     println!("serving demo data");
//! }
//! ```

mod api;
mod display;
mod error;
mod general;
mod store;

pub use api::ApiConfig;
pub use display::DisplayConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::{StoreBackend, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VantageConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VantageConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".vantage/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VANTAGE_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vantage").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = VantageConfig::default();
        assert!(!config.general.demo);
        assert!(!config.api.has_token());
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: VantageConfig = VantageConfig::figment().extract()?;
            assert_eq!(config.general.default_limit, 20);
            assert_eq!(config.api.timeout_secs, 10);
            Ok(())
        });
    }
}
