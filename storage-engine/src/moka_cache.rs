use async_trait::async_trait;
use cinder::domain::response::{DeleteResponse, ExistsResponse, GetResponse, PutResponse};
use cinder::ports::CacheStore;
use moka::future::Cache;
use shared::{Error, Result, TtlMs};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;
use tracing::debug;

/// Moka-based cache implementation with TTL support
/// Provides lock-free, concurrent cache with optional size bounds and TTL
pub struct MokaCache<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    cache: Cache<K, V>,
}

impl<K, V> MokaCache<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    /// Create a new unbounded Moka cache with optional default TTL
    pub fn new_unbounded(default_ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder();

        if let Some(ttl) = default_ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            cache: builder.build(),
        }
    }

    /// Create a Moka cache from name and optional capacity
    pub fn new(name: String, max_entries: Option<u64>, default_ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder().name(&name);

        if let Some(capacity) = max_entries {
            builder = builder.max_capacity(capacity);
        }

        if let Some(ttl) = default_ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            cache: builder.build(),
        }
    }
}

#[async_trait]
impl<K, V> CacheStore<K, V> for MokaCache<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    async fn exists(&self, key: &K) -> Result<ExistsResponse> {
        Ok(ExistsResponse::new(self.cache.contains_key(key)))
    }

    async fn put(&self, key: K, val: V, ttl: Option<TtlMs>) -> Result<PutResponse> {
        // Moka applies the TTL configured at build time; per-entry TTL would
        // need Expiry-based wiring, so the global TTL wins here.
        if let Some(TtlMs(ms)) = ttl {
            debug!(ttl_ms = ms, "per-entry TTL requested, using cache-wide TTL");
        }

        self.cache.insert(key, val).await;
        Ok(PutResponse::new(true, "Successfully inserted"))
    }

    async fn get(&self, key: &K) -> Result<GetResponse<V>> {
        match self.cache.get(key).await {
            Some(value) => Ok(GetResponse::new(true, value)),
            None => Err(Error::NotFound), // Either doesn't exist or TTL expired
        }
    }

    async fn delete(&self, key: &K) -> Result<DeleteResponse> {
        let existed = self.cache.remove(key).await.is_some();
        Ok(DeleteResponse::new(existed))
    }
}

impl<K, V> Debug for MokaCache<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCache")
            .field("entry_count", &self.cache.entry_count())
            .field("weighted_size", &self.cache.weighted_size())
            .finish()
    }
}
