//! Zstd codec over in-memory buffers. Stateless; safe to call from any
//! number of tasks at once.

use shared::{Error, Result};
use std::io;

/// Compress `raw` at the given zstd level.
///
/// Errors here are encoder-internal and the caller is expected to fall back
/// to storing the value uncompressed, so the write path never fails because
/// of compression.
pub fn compress(raw: &[u8], level: i32) -> io::Result<Vec<u8>> {
    zstd::stream::encode_all(raw, level)
}

/// Decompress a zstd stream, pre-sizing the output from the length declared
/// in the frame header.
///
/// Fails with `CorruptPayload` when `encoded` is not a well-formed zstd
/// stream.
pub fn decompress(encoded: &[u8], original_len: usize) -> Result<Vec<u8>> {
    let mut raw = Vec::with_capacity(original_len);
    zstd::stream::copy_decode(encoded, &mut raw)
        .map_err(|e| Error::CorruptPayload(e.to_string()))?;
    Ok(raw)
}
