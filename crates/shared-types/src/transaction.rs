//! # Transactions and Batches
//!
//! Envelope types exchanged with the host ledger. Headers are encoded with the
//! canonical codec and the encoded bytes are what gets signed.

use crate::codec;
use crate::errors::CodecError;
use serde::{Deserialize, Serialize};

/// Signed metadata of a single transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHeader {
    pub family_name: String,
    pub family_version: String,
    /// Addresses the transaction may read.
    pub inputs: Vec<String>,
    /// Addresses the transaction may write.
    pub outputs: Vec<String>,
    /// Hex public key of the transaction signer.
    pub signer_public_key: String,
    /// Hex public key of the batch signer.
    pub batcher_public_key: String,
    /// Transaction ids that must commit first.
    pub dependencies: Vec<String>,
    /// Hex SHA-512 of the payload bytes.
    pub payload_sha512: String,
    /// Disambiguates otherwise identical headers.
    pub nonce: String,
}

impl TransactionHeader {
    /// Canonical header bytes (the signed message).
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(self)
    }

    /// Parse header bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::decode(bytes)
    }
}

/// Transaction as submitted to the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Encoded [`TransactionHeader`].
    pub header: Vec<u8>,
    /// Hex signature over `header`; doubles as the transaction id.
    pub header_signature: String,
    /// Encoded family payload.
    pub payload: Vec<u8>,
}

/// Signed metadata of a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchHeader {
    pub signer_public_key: String,
    /// Ids of the contained transactions, in order.
    pub transaction_ids: Vec<String>,
}

impl BatchHeader {
    /// Canonical header bytes (the signed message).
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(self)
    }
}

/// Atomic group of transactions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Encoded [`BatchHeader`].
    pub header: Vec<u8>,
    /// Hex signature over `header`; doubles as the batch id.
    pub header_signature: String,
    pub transactions: Vec<Transaction>,
}

impl Batch {
    /// Batch id used for status queries.
    pub fn id(&self) -> &str {
        &self.header_signature
    }
}

/// Body of a batch submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchList {
    pub batches: Vec<Batch>,
}

impl BatchList {
    /// Canonical submission bytes.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(self)
    }

    /// Parse submission bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::decode(bytes)
    }
}
