//! Canonical binary codec.
//!
//! All ledger bytes (payloads, headers, containers) go through these two
//! functions so that encoding settings can never drift between writers.

use crate::errors::CodecError;
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Upper bound on any encoded value. Length prefixes beyond this are rejected
/// before allocation.
pub const MAX_ENCODED_LEN: u64 = 16 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .with_limit(MAX_ENCODED_LEN)
        .reject_trailing_bytes()
}

/// Serialize `value` to canonical bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    options()
        .serialize(value)
        .map_err(|e| CodecError::Encode(e.to_string()))
}

/// Deserialize canonical bytes. Trailing bytes are an error.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    options()
        .deserialize(bytes)
        .map_err(|e| CodecError::Decode(e.to_string()))
}
