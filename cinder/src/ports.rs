#![deny(clippy::all)]

use crate::domain::CacheConfig;
use crate::domain::response::{DeleteResponse, ExistsResponse, GetResponse, PutResponse};
use async_trait::async_trait;
use shared::{Result, TtlMs};
use std::sync::Arc;

// Ports are the pluggable extension points for underlying cache implementations

/// Port for creating cache storage from configuration
/// This allows different storage backends to be plugged in
pub trait StorageFactory<K, V>: Send + Sync + 'static {
    /// Create a new cache store from configuration
    fn create_from_config(&self, config: &CacheConfig) -> Arc<dyn CacheStore<K, V>>;
}

/// Port for asynchronous cache operations.
///
/// A miss is reported as `Err(Error::NotFound)`; the returned future resolves
/// exactly once, which is the whole completion contract a caller can rely on.
/// Layered stores (e.g. a compression wrapper) implement this same trait and
/// delegate to an inner `CacheStore`, so consumers never see the layering.
#[async_trait]
pub trait CacheStore<K, V>: Send + Sync + 'static {
    async fn exists(&self, key: &K) -> Result<ExistsResponse>;
    async fn put(&self, key: K, val: V, ttl: Option<TtlMs>) -> Result<PutResponse>;
    async fn get(&self, key: &K) -> Result<GetResponse<V>>;
    async fn delete(&self, key: &K) -> Result<DeleteResponse>;
}
