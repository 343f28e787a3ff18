use anyhow::Context;
use folio_config::FolioConfig;
use folio_query::Gateway;
use folio_store::{ContentStore, Snapshot};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: FolioConfig,
    pub store: ContentStore,
}

impl AppContext {
    #[must_use]
    pub fn init(config: FolioConfig) -> Self {
        let store = ContentStore::open(config.content.dir_path());
        Self { config, store }
    }

    /// Load every collection. Any load failure aborts the command.
    pub fn snapshot(&self) -> anyhow::Result<Snapshot> {
        self.store
            .snapshot()
            .with_context(|| format!("failed to load content from {}", self.config.content.dir))
    }

    pub fn gateway(&self) -> anyhow::Result<Gateway> {
        Ok(Gateway::new(self.snapshot()?))
    }
}
