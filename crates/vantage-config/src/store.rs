//! Local key/value store selection.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which backend holds the cached analytics connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// One JSON file per key under [`StoreConfig::dir`].
    #[default]
    File,
    /// OS keychain.
    Keyring,
    /// Process memory; nothing survives the process.
    Memory,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Directory for the file backend. Empty means `<config_dir>/vantage`.
    #[serde(default)]
    pub dir: String,
}

impl StoreConfig {
    /// Resolved directory for the file backend.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.is_empty() {
            dirs::config_dir().map(|p| p.join("vantage"))
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }
}
