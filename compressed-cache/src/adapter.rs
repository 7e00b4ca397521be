use crate::codec;
use crate::frame::{self, Encoding, Frame, MAX_VALUE_BYTES};
use crate::stats::CacheCompressionStats;
use async_trait::async_trait;
use bytes::Bytes;
use cinder::domain::response::{DeleteResponse, ExistsResponse, GetResponse, PutResponse};
use cinder::ports::CacheStore;
use shared::config::Config;
use shared::{Error, Result, TtlMs};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Compression layer over any [`CacheStore`] holding `Bytes` values.
///
/// Values are compressed and framed before they reach the backend and
/// restored on the way out; callers see the backend's own contract,
/// unchanged. A stored entry that fails to unframe or decompress is reported
/// as `Err(Error::NotFound)` — on a hot serving path a corrupted cache entry
/// should send the caller down its normal miss path, not fail the request.
///
/// The adapter holds no mutable state of its own, so a single instance is
/// freely shared across tasks; concurrency is whatever the backend and the
/// stats counters guarantee.
pub struct CompressedCache<K> {
    backend: Arc<dyn CacheStore<K, Bytes>>,
    stats: CacheCompressionStats,
    level: i32,
    min_compress_bytes: usize,
}

impl<K> CompressedCache<K>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
{
    /// Wrap `backend` with default compression settings.
    pub fn new(backend: Arc<dyn CacheStore<K, Bytes>>, stats: CacheCompressionStats) -> Self {
        Self::from_config(backend, stats, &Config::default())
    }

    /// Wrap `backend` with settings taken from `config`.
    pub fn from_config(
        backend: Arc<dyn CacheStore<K, Bytes>>,
        stats: CacheCompressionStats,
        config: &Config,
    ) -> Self {
        Self {
            backend,
            stats,
            level: config.compression_level,
            min_compress_bytes: config.min_compress_bytes,
        }
    }

    /// Build the framed representation of `raw`.
    ///
    /// Small values skip the codec entirely; values the codec does not
    /// actually shrink, and the rare encoder error, fall back to the `None`
    /// encoding. Either way this cannot fail, so `put` adds no failure mode
    /// of its own.
    fn encode(&self, raw: &[u8]) -> Bytes {
        if raw.len() >= self.min_compress_bytes {
            match codec::compress(raw, self.level) {
                Ok(compressed) if compressed.len() < raw.len() => {
                    return frame::wrap(Encoding::Zstd, raw.len(), &compressed);
                }
                Ok(_) => {
                    debug!(raw_len = raw.len(), "value did not shrink, storing verbatim");
                }
                Err(e) => {
                    warn!(error = %e, "compression failed, storing verbatim");
                }
            }
        }
        frame::wrap(Encoding::None, raw.len(), raw)
    }

    /// Recover the original value from a framed backend payload.
    ///
    /// Any failure here means the stored entry cannot be trusted; the caller
    /// collapses it to a miss.
    fn decode(framed: Bytes) -> Result<Bytes> {
        let Frame {
            encoding,
            original_len,
            payload,
        } = frame::unwrap(framed)?;

        match encoding {
            Encoding::None => Ok(payload),
            Encoding::Zstd => {
                let raw = codec::decompress(&payload, original_len)?;
                if raw.len() != original_len {
                    return Err(Error::MalformedFrame(format!(
                        "decompressed to {} bytes, header declared {original_len}",
                        raw.len()
                    )));
                }
                Ok(Bytes::from(raw))
            }
        }
    }
}

#[async_trait]
impl<K> CacheStore<K, Bytes> for CompressedCache<K>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
{
    /// Answered by the backend alone; makes no claim the entry is decodable.
    async fn exists(&self, key: &K) -> Result<ExistsResponse> {
        self.backend.exists(key).await
    }

    async fn put(&self, key: K, val: Bytes, ttl: Option<TtlMs>) -> Result<PutResponse> {
        if val.len() > MAX_VALUE_BYTES {
            return Err(Error::Internal(format!(
                "value of {} bytes exceeds the {MAX_VALUE_BYTES}-byte cap",
                val.len()
            )));
        }

        let start = Instant::now();
        let framed = self.encode(&val);
        self.stats.record_put(val.len(), framed.len(), start.elapsed());

        self.backend.put(key, framed, ttl).await
    }

    async fn get(&self, key: &K) -> Result<GetResponse<Bytes>> {
        // A backend miss (or any backend error) passes through untouched.
        let response = self.backend.get(key).await?;

        let start = Instant::now();
        match Self::decode(response.message) {
            Ok(value) => {
                self.stats.record_get_hit(start.elapsed());
                Ok(GetResponse::new(true, value))
            }
            Err(e) => {
                self.stats.record_decode_failure();
                warn!(key = ?key, error = %e, "dropping undecodable cache entry");
                Err(Error::NotFound)
            }
        }
    }

    async fn delete(&self, key: &K) -> Result<DeleteResponse> {
        self.backend.delete(key).await
    }
}

impl<K> Debug for CompressedCache<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompressedCache")
            .field("level", &self.level)
            .field("min_compress_bytes", &self.min_compress_bytes)
            .finish()
    }
}
