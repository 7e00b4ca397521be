//! Compression counters, registered against a caller-supplied
//! `prometheus::Registry`.
//!
//! Recording is lock-free and infallible: a stats problem must never affect
//! cache correctness, so nothing here returns an error after construction.

use prometheus::{Counter, IntCounter, Registry};
use std::time::Duration;

/// Handles to the adapter's counters. Cheap to clone; clones share the
/// underlying counters.
#[derive(Clone)]
pub struct CacheCompressionStats {
    original_bytes: IntCounter,
    stored_bytes: IntCounter,
    decode_failures: IntCounter,
    compress_seconds: Counter,
    decompress_seconds: Counter,
}

/// Point-in-time read of the counters. Values are monotonically
/// non-decreasing across snapshots; concurrent updates may land between
/// individual reads.
#[derive(Clone, Copy, Debug)]
pub struct StatsSnapshot {
    pub original_bytes: u64,
    pub stored_bytes: u64,
    pub decode_failures: u64,
    pub compress_seconds: f64,
    pub decompress_seconds: f64,
}

impl CacheCompressionStats {
    /// Create the counters and register them with `registry`.
    ///
    /// Fails only if a collector with the same name is already registered.
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        let original_bytes = IntCounter::new(
            "cinder_compression_original_bytes_total",
            "Bytes received for compression",
        )?;
        registry.register(Box::new(original_bytes.clone()))?;

        let stored_bytes = IntCounter::new(
            "cinder_compression_stored_bytes_total",
            "Framed bytes handed to the backend store",
        )?;
        registry.register(Box::new(stored_bytes.clone()))?;

        let decode_failures = IntCounter::new(
            "cinder_decompression_failures_total",
            "Cache entries that failed to unframe or decompress",
        )?;
        registry.register(Box::new(decode_failures.clone()))?;

        let compress_seconds = Counter::new(
            "cinder_compression_seconds_total",
            "Cumulative time spent compressing values",
        )?;
        registry.register(Box::new(compress_seconds.clone()))?;

        let decompress_seconds = Counter::new(
            "cinder_decompression_seconds_total",
            "Cumulative time spent decompressing values",
        )?;
        registry.register(Box::new(decompress_seconds.clone()))?;

        Ok(Self {
            original_bytes,
            stored_bytes,
            decode_failures,
            compress_seconds,
            decompress_seconds,
        })
    }

    pub fn record_put(&self, raw_bytes: usize, stored_bytes: usize, elapsed: Duration) {
        self.original_bytes.inc_by(raw_bytes as u64);
        self.stored_bytes.inc_by(stored_bytes as u64);
        self.compress_seconds.inc_by(elapsed.as_secs_f64());
    }

    pub fn record_get_hit(&self, elapsed: Duration) {
        self.decompress_seconds.inc_by(elapsed.as_secs_f64());
    }

    pub fn record_decode_failure(&self) {
        self.decode_failures.inc();
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            original_bytes: self.original_bytes.get(),
            stored_bytes: self.stored_bytes.get(),
            decode_failures: self.decode_failures.get(),
            compress_seconds: self.compress_seconds.get(),
            decompress_seconds: self.decompress_seconds.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let registry = Registry::new();
        let stats = CacheCompressionStats::register(&registry).unwrap();

        stats.record_put(1000, 120, Duration::from_micros(50));
        stats.record_put(500, 500, Duration::from_micros(20));
        stats.record_get_hit(Duration::from_micros(30));
        stats.record_decode_failure();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.original_bytes, 1500);
        assert_eq!(snapshot.stored_bytes, 620);
        assert_eq!(snapshot.decode_failures, 1);
        assert!(snapshot.compress_seconds > 0.0);
        assert!(snapshot.decompress_seconds > 0.0);
    }

    #[test]
    fn counters_show_up_in_registry() {
        let registry = Registry::new();
        let stats = CacheCompressionStats::register(&registry).unwrap();
        stats.record_put(10, 15, Duration::ZERO);

        let families: Vec<String> = registry
            .gather()
            .into_iter()
            .map(|f| f.get_name().to_string())
            .collect();
        assert!(families.contains(&"cinder_compression_original_bytes_total".to_string()));
        assert!(families.contains(&"cinder_decompression_failures_total".to_string()));
    }

    #[test]
    fn double_registration_is_rejected() {
        let registry = Registry::new();
        CacheCompressionStats::register(&registry).unwrap();
        assert!(CacheCompressionStats::register(&registry).is_err());
    }
}
