//! Decoding of `name` table strings.
//!
//! Strings on Unicode platforms are stored as UTF-16BE. Everything else is
//! left as raw bytes; interpreting legacy Macintosh and Microsoft code pages
//! is up to the caller.

use crate::{
    error::{Error, Result},
    ids::{EncodingId, PlatformId},
};

/// Returns true if strings with the given platform and encoding are stored
/// as UTF-16BE.
pub fn is_unicode(platform: PlatformId, encoding: EncodingId) -> bool {
    match platform {
        PlatformId::APPLE_UNICODE => true,
        PlatformId::MICROSOFT => matches!(
            encoding,
            EncodingId::MS_SYMBOL_CS | EncodingId::MS_UNICODE_CS | EncodingId::MS_UCS_4
        ),
        _ => false,
    }
}

/// Decodes UTF-16BE bytes into UTF-8.
///
/// Fails with [`Error::UnableToDecode`] if the input has an odd length or
/// contains an unpaired surrogate.
pub fn decode_utf16be(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::UnableToDecode);
    }
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<core::result::Result<String, _>>()
        .map_err(|_| Error::UnableToDecode)
}

/// Encodes text as UTF-16BE.
pub fn encode_utf16be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// Decodes the raw bytes of a `name` record.
///
/// Unicode records are converted to UTF-8; all others are returned as is.
pub fn decode_name(platform: PlatformId, encoding: EncodingId, bytes: &[u8]) -> Result<Vec<u8>> {
    if is_unicode(platform, encoding) {
        decode_utf16be(bytes).map(String::into_bytes)
    } else {
        Ok(bytes.to_vec())
    }
}
