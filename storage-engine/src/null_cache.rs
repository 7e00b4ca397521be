use async_trait::async_trait;
use cinder::domain::response::{DeleteResponse, ExistsResponse, GetResponse, PutResponse};
use cinder::ports::CacheStore;
use shared::{Error, Result, TtlMs};
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

/// Cache that stores nothing: every put is accepted and dropped, every get
/// misses. Useful for disabling caching behind the same port and for
/// measuring the raw overhead of layers stacked on top of a store.
pub struct NullCache<K, V> {
    _marker: PhantomData<fn(K, V)>,
}

impl<K, V> NullCache<K, V> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K, V> Default for NullCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, V> CacheStore<K, V> for NullCache<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Debug + Send + Sync + Clone + 'static,
{
    async fn exists(&self, _key: &K) -> Result<ExistsResponse> {
        Ok(ExistsResponse::new(false))
    }

    async fn put(&self, _key: K, _val: V, _ttl: Option<TtlMs>) -> Result<PutResponse> {
        Ok(PutResponse::new(true, "Successfully dropped"))
    }

    async fn get(&self, _key: &K) -> Result<GetResponse<V>> {
        Err(Error::NotFound)
    }

    async fn delete(&self, _key: &K) -> Result<DeleteResponse> {
        Ok(DeleteResponse::new(false))
    }
}

impl<K, V> Debug for NullCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NullCache").finish()
    }
}
