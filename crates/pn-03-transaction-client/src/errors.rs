//! Client error types.

use shared_types::CodecError;
use thiserror::Error;

/// Errors from building, signing or submitting transactions.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    /// The REST API answered with a non-success status.
    #[error("REST API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid client configuration: {0}")]
    Config(String),
}
