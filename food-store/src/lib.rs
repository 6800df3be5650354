mod config;
mod file;
mod postgres;

pub use config::StoreConfig;
pub use file::FileStore;
use food_registry::{FoodRegistry, PersistentStore, RegistryError, StoreError};
pub use postgres::PgStore;

/// Whichever backend [`StoreConfig`] selected.
#[derive(Debug, Clone)]
pub enum AnyStore {
    File(FileStore),
    Postgres(PgStore),
}

impl PersistentStore for AnyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            AnyStore::File(store) => store.get(key).await,
            AnyStore::Postgres(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        match self {
            AnyStore::File(store) => store.set(key, value).await,
            AnyStore::Postgres(store) => store.set(key, value).await,
        }
    }
}

pub async fn open_store(config: &StoreConfig) -> anyhow::Result<AnyStore> {
    let store = match config {
        StoreConfig::File { dir } => {
            tracing::info!(dir = %dir.display(), "Using file store");
            AnyStore::File(FileStore::new(dir))
        }
        StoreConfig::Postgres {
            database_url,
            max_connections,
        } => AnyStore::Postgres(PgStore::connect(database_url, *max_connections).await?),
    };

    Ok(store)
}

/// Opens the configured store and loads the food list from it.
///
/// A failed load is logged and the registry is returned anyway, empty or holding the
/// unsaved seed records, so callers can still show a screen and report the error.
pub async fn open_registry(
    config: &StoreConfig,
) -> anyhow::Result<(FoodRegistry<AnyStore>, Option<RegistryError>)> {
    let store = open_store(config).await?;
    let mut registry = FoodRegistry::new(store);

    match registry.initialize().await {
        Ok(outcome) => {
            tracing::info!(?outcome, "Food registry ready");
            Ok((registry, None))
        }
        Err(e) => {
            tracing::error!(error = ?e, "Food registry failed to load");
            Ok((registry, Some(e)))
        }
    }
}
