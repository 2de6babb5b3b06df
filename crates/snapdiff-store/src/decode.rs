//! Upload decoding: gzip decompression followed by JSON parsing.

use crate::errors::{decompression_error, parse_error, Result};
use flate2::read::GzDecoder;
use serde_json::Value;
use std::io::Read as _;

/// Decompress a complete gzip stream held in memory.
///
/// `source_name` identifies the upload (field or file name) in errors.
///
/// # Errors
///
/// - `Decompression`: the bytes are not a valid gzip stream
pub fn decompress_gzip(source_name: &str, bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::with_capacity(bytes.len().saturating_mul(4));
    decoder
        .read_to_end(&mut out)
        .map_err(|e| decompression_error(source_name, e))?;
    Ok(out)
}

/// Parse UTF-8 JSON text into a value.
///
/// # Errors
///
/// - `Serialization`: the bytes are not valid UTF-8 JSON
pub fn parse_json(source_name: &str, bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| parse_error(source_name, e))
}

/// Decompress and parse one uploaded snapshot file.
pub fn decode_gzip_json(source_name: &str, bytes: &[u8]) -> Result<Value> {
    let raw = decompress_gzip(source_name, bytes)?;
    tracing::debug!(
        source = source_name,
        compressed_bytes = bytes.len(),
        decompressed_bytes = raw.len(),
        "decompressed upload"
    );
    parse_json(source_name, &raw)
}
