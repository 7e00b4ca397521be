use tracing::warn;

/// Zstd level used when nothing overrides it (3 = fast with a good ratio).
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;

/// Values below this many bytes are stored as-is; the frame header alone
/// would eat most of the savings.
pub const DEFAULT_MIN_COMPRESS_BYTES: usize = 256;

pub struct Config {
    pub compression_level: i32,
    pub min_compress_bytes: usize,
    pub max_entries: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        let compression_level = std::env::var("CINDER_COMPRESSION_LEVEL")
            .ok()
            .and_then(|v| match v.parse::<i32>() {
                Ok(level) if (1..=22).contains(&level) => Some(level),
                _ => {
                    warn!("CINDER_COMPRESSION_LEVEL must be 1..=22, using default");
                    None
                }
            })
            .unwrap_or(DEFAULT_COMPRESSION_LEVEL);

        let min_compress_bytes = std::env::var("CINDER_MIN_COMPRESS_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MIN_COMPRESS_BYTES);

        let max_entries = std::env::var("CINDER_MAX_ENTRIES")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());

        Self {
            compression_level,
            min_compress_bytes,
            max_entries,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            min_compress_bytes: DEFAULT_MIN_COMPRESS_BYTES,
            max_entries: None,
        }
    }
}
