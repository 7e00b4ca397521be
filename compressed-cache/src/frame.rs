//! On-cache frame layout. Private to this crate; the framed bytes never
//! cross a process boundary.
//!
//! Format: [encoding: u8][original_len: u32][payload bytes]
//!
//! The declared original length lets the decoder pre-size its output buffer
//! and reject absurd entries before the codec ever runs, which is the first
//! line of defense against truncated or corrupted entries coming back from
//! the backend store.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use shared::{Error, Result};

// Encoding identifiers
pub const ENCODING_NONE: u8 = 0x00;
pub const ENCODING_ZSTD: u8 = 0x01;

/// Header size: encoding byte + u32 original length
pub const HEADER_LEN: usize = 5;

/// Upper bound on a declared original length. A header claiming more than
/// this is rejected as malformed rather than trusted with an allocation.
pub const MAX_VALUE_BYTES: usize = 1 << 30; // 1 GiB

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Payload stored verbatim (too small to compress, or incompressible)
    None,
    /// Payload is a zstd stream
    Zstd,
}

impl Encoding {
    fn id(self) -> u8 {
        match self {
            Encoding::None => ENCODING_NONE,
            Encoding::Zstd => ENCODING_ZSTD,
        }
    }
}

/// A validated frame: recognized encoding, plausible declared length.
#[derive(Clone, Debug)]
pub struct Frame {
    pub encoding: Encoding,
    pub original_len: usize,
    pub payload: Bytes,
}

/// Prepend the frame header to `payload`.
///
/// `original_len` is the uncompressed value length, which for the `None`
/// encoding equals `payload.len()`. Callers must have rejected values above
/// `MAX_VALUE_BYTES` before framing.
pub fn wrap(encoding: Encoding, original_len: usize, payload: &[u8]) -> Bytes {
    debug_assert!(original_len <= MAX_VALUE_BYTES);

    let mut buf = BytesMut::with_capacity(HEADER_LEN + payload.len());
    buf.put_u8(encoding.id());
    buf.put_u32(original_len as u32);
    buf.put_slice(payload);
    buf.freeze()
}

/// Split a framed buffer back into its validated parts.
///
/// Fails with `MalformedFrame` when the buffer is shorter than the header,
/// the encoding byte is unrecognized, the declared length exceeds
/// `MAX_VALUE_BYTES`, or a `None`-encoded payload does not match its
/// declared length.
pub fn unwrap(mut framed: Bytes) -> Result<Frame> {
    if framed.len() < HEADER_LEN {
        return Err(Error::MalformedFrame(format!(
            "{} bytes is shorter than the {HEADER_LEN}-byte header",
            framed.len()
        )));
    }

    let encoding = match framed.get_u8() {
        ENCODING_NONE => Encoding::None,
        ENCODING_ZSTD => Encoding::Zstd,
        other => {
            return Err(Error::MalformedFrame(format!(
                "unrecognized encoding id {other:#04x}"
            )));
        }
    };

    let original_len = framed.get_u32() as usize;
    if original_len > MAX_VALUE_BYTES {
        return Err(Error::MalformedFrame(format!(
            "declared length {original_len} exceeds {MAX_VALUE_BYTES}"
        )));
    }

    if encoding == Encoding::None && original_len != framed.len() {
        return Err(Error::MalformedFrame(format!(
            "declared length {original_len} != stored length {}",
            framed.len()
        )));
    }

    Ok(Frame {
        encoding,
        original_len,
        payload: framed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_unwrap_round_trip() {
        let payload = b"compressed bytes go here";
        let framed = wrap(Encoding::Zstd, 1000, payload);
        assert_eq!(framed.len(), HEADER_LEN + payload.len());

        let frame = unwrap(framed).unwrap();
        assert_eq!(frame.encoding, Encoding::Zstd);
        assert_eq!(frame.original_len, 1000);
        assert_eq!(frame.payload.as_ref(), payload);
    }

    #[test]
    fn wrap_unwrap_none_encoding() {
        let payload = b"stored verbatim";
        let framed = wrap(Encoding::None, payload.len(), payload);

        let frame = unwrap(framed).unwrap();
        assert_eq!(frame.encoding, Encoding::None);
        assert_eq!(frame.original_len, payload.len());
        assert_eq!(frame.payload.as_ref(), payload);
    }

    #[test]
    fn empty_value_frames_cleanly() {
        let frame = unwrap(wrap(Encoding::None, 0, b"")).unwrap();
        assert_eq!(frame.original_len, 0);
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn shorter_than_header_is_malformed() {
        for len in 0..HEADER_LEN {
            let result = unwrap(Bytes::copy_from_slice(&vec![0u8; len]));
            assert!(matches!(result.unwrap_err(), Error::MalformedFrame(_)));
        }
    }

    #[test]
    fn unknown_encoding_is_malformed() {
        let mut framed = wrap(Encoding::Zstd, 10, b"payload").to_vec();
        framed[0] = 0x7f;
        let result = unwrap(Bytes::from(framed));
        assert!(matches!(result.unwrap_err(), Error::MalformedFrame(_)));
    }

    #[test]
    fn absurd_declared_length_is_malformed() {
        let mut buf = BytesMut::new();
        buf.put_u8(ENCODING_ZSTD);
        buf.put_u32(u32::MAX);
        buf.put_slice(b"payload");
        let result = unwrap(buf.freeze());
        assert!(matches!(result.unwrap_err(), Error::MalformedFrame(_)));
    }

    #[test]
    fn none_encoding_length_mismatch_is_malformed() {
        let framed = wrap(Encoding::None, 99, b"only fifteen by");
        let result = unwrap(framed);
        assert!(matches!(result.unwrap_err(), Error::MalformedFrame(_)));
    }
}
