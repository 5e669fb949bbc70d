#[cfg(feature = "store-http")]
use crate::HttpBillStore;
#[cfg(feature = "store-memory")]
use crate::InMemoryBillStore;
#[cfg(not(all(feature = "store-http", feature = "store-memory")))]
use crate::StoreError;
use crate::{BillStore, StoreBackend, StoreResult};
use billed_core::BilledConfig;
use std::sync::Arc;

/// Create a bill store backend based on configuration
pub fn create_store(config: &BilledConfig) -> StoreResult<Arc<dyn BillStore>> {
    match config.store_backend {
        #[cfg(feature = "store-http")]
        StoreBackend::Http => {
            let store = HttpBillStore::new(config.api_url.clone(), config.store_timeout())?;
            tracing::info!(api_url = %store.base_url(), "Using HTTP bill store");
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "store-http"))]
        StoreBackend::Http => Err(StoreError::ConfigError(
            "HTTP store backend not available (store-http feature not enabled)".to_string(),
        )),

        #[cfg(feature = "store-memory")]
        StoreBackend::Memory => {
            tracing::info!(
                base_url = %config.memory_store_base_url,
                "Using in-memory bill store"
            );
            Ok(Arc::new(InMemoryBillStore::new(
                config.memory_store_base_url.clone(),
            )))
        }

        #[cfg(not(feature = "store-memory"))]
        StoreBackend::Memory => Err(StoreError::ConfigError(
            "Memory store backend not available (store-memory feature not enabled)".to_string(),
        )),
    }
}
