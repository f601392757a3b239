use std::sync::Arc;

use vantage_config::VantageConfig;
use vantage_dashboard::integration::AnalyticsIntegration;
use vantage_dashboard::view::ViewRenderer;
use vantage_store::KeyValueStore;

use crate::backend::AnyBackend;
use crate::bootstrap;
use crate::cli::GlobalFlags;

/// Everything a command handler needs, built once per invocation.
pub struct AppContext {
    pub config: VantageConfig,
    pub backend: Arc<AnyBackend>,
    pub store: Arc<dyn KeyValueStore>,
    pub view: ViewRenderer,
}

impl AppContext {
    pub fn init(config: VantageConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let backend = Arc::new(bootstrap::build_backend(&config, flags.demo)?);
        let store = bootstrap::build_store(&config)?;
        let view = ViewRenderer::from_config(&config.display);
        Ok(Self {
            config,
            backend,
            store,
            view,
        })
    }

    pub fn integration(&self) -> AnalyticsIntegration {
        AnalyticsIntegration::new(Arc::clone(&self.store))
    }

    /// Limit precedence: command flag, then global flag, then config.
    pub fn limit(&self, local: Option<u32>, flags: &GlobalFlags) -> usize {
        let limit = crate::commands::shared::limit::effective_limit(
            local,
            flags.limit,
            self.config.general.default_limit,
        );
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}
