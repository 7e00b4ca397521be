//! Transparent compression layer over any [`cinder::ports::CacheStore`].
//!
//! [`CompressedCache`] compresses values on the way into a backend store and
//! decompresses them on the way out, without changing the cache contract the
//! backend exposes: same keys, same async completion, same miss behavior.
//! An entry that fails to unframe or decompress is reported as a miss, never
//! as an error, so a corrupted backend entry looks exactly like an uncached
//! key and callers fall back to their normal miss path.

pub mod adapter;
pub mod codec;
pub mod frame;
pub mod stats;

pub use adapter::CompressedCache;
pub use stats::{CacheCompressionStats, StatsSnapshot};
