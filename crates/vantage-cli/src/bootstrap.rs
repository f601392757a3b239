use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use vantage_api::{DemoBackend, HttpBackend};
use vantage_config::{StoreBackend, VantageConfig};
use vantage_store::{FileStore, KeyValueStore, KeyringStore, MemoryStore};

use crate::backend::AnyBackend;

pub fn load_config() -> anyhow::Result<VantageConfig> {
    load_dotenv()?;
    VantageConfig::load().map_err(anyhow::Error::from)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

pub fn build_backend(config: &VantageConfig, demo: bool) -> anyhow::Result<AnyBackend> {
    if demo || config.general.demo {
        tracing::debug!("using demo backend");
        return Ok(AnyBackend::Demo(DemoBackend::new()));
    }

    let base_url = config.api.normalized_base_url()?;
    let token = config.api.has_token().then(|| config.api.token.clone());
    let backend = HttpBackend::new(
        &base_url,
        token,
        Duration::from_secs(config.api.timeout_secs.max(1)),
    )
    .with_context(|| format!("failed to build API client for {base_url}"))?;
    tracing::debug!(%base_url, "using http backend");
    Ok(AnyBackend::Http(backend))
}

pub fn build_store(config: &VantageConfig) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.store.backend {
        StoreBackend::File => {
            let dir = config
                .store
                .resolved_dir()
                .context("no config directory available; set store.dir")?;
            Arc::new(FileStore::new(dir))
        }
        StoreBackend::Keyring => Arc::new(KeyringStore::from_env()),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };
    tracing::debug!(backend = store.backend_name(), "store ready");
    Ok(store)
}
