//! # Inbound Port
//!
//! What the host ledger drives: family registration and per-transaction apply.

use crate::errors::ApplyError;
use crate::ports::outbound::StateContext;
use async_trait::async_trait;
use shared_types::{CodecError, Transaction, TransactionHeader};

/// A transaction as handed to the family handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRequest {
    /// Decoded, host-verified header.
    pub header: TransactionHeader,
    /// Header signature (transaction id).
    pub signature: String,
    /// Opaque family payload.
    pub payload: Vec<u8>,
}

impl TransactionRequest {
    /// Unpack a submitted transaction.
    pub fn from_transaction(tx: &Transaction) -> Result<Self, CodecError> {
        Ok(Self {
            header: TransactionHeader::decode(&tx.header)?,
            signature: tx.header_signature.clone(),
            payload: tx.payload.clone(),
        })
    }

    /// Public key of the transaction signer.
    pub fn signer(&self) -> &str {
        &self.header.signer_public_key
    }
}

/// Host registration contract of a transaction family.
#[async_trait]
pub trait TransactionHandler: Send + Sync {
    /// Family name this handler processes.
    fn family_name(&self) -> &str;

    /// Family versions this handler processes.
    fn family_versions(&self) -> Vec<String>;

    /// Address prefixes this handler reads and writes.
    fn namespaces(&self) -> Vec<String>;

    /// Validate and apply one transaction.
    ///
    /// On any `Err`, no state has been written by this call.
    async fn apply(
        &self,
        request: &TransactionRequest,
        context: &dyn StateContext,
    ) -> Result<(), ApplyError>;
}
