//! # Error Types
//!
//! Errors shared by every crate that touches ledger bytes.

use thiserror::Error;

/// Encoding or decoding of ledger bytes failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Value could not be serialized (e.g. exceeds the size limit).
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// Bytes are not a valid encoding of the expected type.
    #[error("Malformed bytes: {0}")]
    Decode(String),
}
