pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

use std::sync::Arc;

use crate::config::{DatabaseConfig, StorageBackend};

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};

/// Open the store selected by the configured database URL
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    match config.backend {
        StorageBackend::Postgres => Ok(Arc::new(PgUserStore::connect(config).await?)),
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory user store; data will not persist");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}
