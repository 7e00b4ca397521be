//! Measures the put+get overhead of the compression layer for 1K/1M values
//! at two entropy levels. Low-entropy values repeat a small random chunk and
//! compress well; high-entropy values are uniformly random and don't.

use bytes::Bytes;
use cinder::ports::CacheStore;
use compressed_cache::{CacheCompressionStats, CompressedCache};
use criterion::{Criterion, criterion_group, criterion_main};
use prometheus::Registry;
use rand::RngCore;
use std::sync::Arc;
use storage_engine::MokaCache;
use tokio::runtime::Runtime;

fn payload(total: usize, chunk: usize) -> Bytes {
    let mut block = vec![0u8; chunk];
    rand::rng().fill_bytes(&mut block);
    let mut value = Vec::with_capacity(total + chunk);
    while value.len() < total {
        value.extend_from_slice(&block);
    }
    value.truncate(total);
    Bytes::from(value)
}

fn bench_put_get(c: &mut Criterion, name: &str, total: usize, chunk: usize) {
    let rt = Runtime::new().unwrap();
    let backend = Arc::new(MokaCache::new("bench".to_string(), None, None));
    let stats = CacheCompressionStats::register(&Registry::new()).unwrap();
    let cache = CompressedCache::new(
        backend as Arc<dyn CacheStore<String, Bytes>>,
        stats,
    );
    let value = payload(total, chunk);

    c.bench_function(name, |b| {
        b.iter(|| {
            rt.block_on(async {
                cache
                    .put("key".to_string(), value.clone(), None)
                    .await
                    .unwrap();
                cache.get(&"key".to_string()).await.unwrap()
            })
        })
    });
}

fn compression_benches(c: &mut Criterion) {
    bench_put_get(c, "compress_1m_high_entropy", 1_000_000, 1_000_000);
    bench_put_get(c, "compress_1k_high_entropy", 1000, 1000);
    bench_put_get(c, "compress_1m_low_entropy", 1_000_000, 1000);
    bench_put_get(c, "compress_1k_low_entropy", 1000, 50);
}

criterion_group!(benches, compression_benches);
criterion_main!(benches);
