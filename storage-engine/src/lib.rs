pub mod moka_cache;
pub mod null_cache;

pub use moka_cache::MokaCache;
pub use null_cache::NullCache;

use cinder::domain::CacheConfig;
use cinder::ports::{CacheStore, StorageFactory};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

/// Factory producing Moka-backed stores from a `CacheConfig`
pub struct MokaStorageFactory;

impl<K, V> StorageFactory<K, V> for MokaStorageFactory
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    fn create_from_config(&self, config: &CacheConfig) -> Arc<dyn CacheStore<K, V>> {
        let default_ttl = config.default_ttl_ms.map(Duration::from_millis);
        Arc::new(MokaCache::new(
            config.name.clone(),
            config.max_entries,
            default_ttl,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_factory_builds_working_store() {
        let config = CacheConfig::new("factory-test", Some(1024), None, None);
        let store: Arc<dyn CacheStore<String, String>> =
            MokaStorageFactory.create_from_config(&config);

        store
            .put("key".to_string(), "value".to_string(), None)
            .await
            .unwrap();
        let response = store.get(&"key".to_string()).await.unwrap();
        assert_eq!(response.message, "value");
    }
}
