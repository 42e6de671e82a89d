//! # Transaction & Batch Builder
//!
//! Wraps one family payload in a signed transaction and a signed batch.
//!
//! | Action | Inputs | Outputs |
//! |--------|--------|---------|
//! | `CREATE_OWNER` | owner(signer) | owner(signer) |
//! | `CREATE_RECORD` | owner(signer), record(id) | record(id) |
//! | `TRANSFER_RECORD` | owner(signer), owner(receiver), record(id) | record(id) |
//! | `UPDATE_RECORD` | owner(signer), record(id) | record(id) |

use crate::errors::ClientError;
use crate::signing::Signer;
use pn_01_addressing::Addresser;
use rand::Rng;
use sha2::{Digest, Sha512};
use shared_types::{
    Batch, BatchHeader, BatchList, CreateOwnerAction, CreateRecordAction, PayloadData,
    PnrdPayload, Timestamp, Transaction, TransactionHeader, TransferRecordAction,
    UpdateRecordAction,
};
use std::sync::Arc;

/// Builds signed single-transaction batches for one signer.
///
/// Batches are signed by `batch_signer` when one is given, otherwise by the
/// transaction signer.
#[derive(Clone)]
pub struct TransactionBuilder {
    signer: Arc<dyn Signer>,
    batch_signer: Arc<dyn Signer>,
    addresser: Addresser,
}

impl TransactionBuilder {
    pub fn new(
        signer: Arc<dyn Signer>,
        batch_signer: Option<Arc<dyn Signer>>,
        addresser: Addresser,
    ) -> Self {
        let batch_signer = batch_signer.unwrap_or_else(|| signer.clone());
        Self {
            signer,
            batch_signer,
            addresser,
        }
    }

    /// Public key of the transaction signer.
    pub fn public_key(&self) -> String {
        self.signer.public_key_hex()
    }

    pub(crate) fn signer(&self) -> Arc<dyn Signer> {
        self.signer.clone()
    }

    /// Public key of the batch signer.
    pub fn batcher_public_key(&self) -> String {
        self.batch_signer.public_key_hex()
    }

    pub fn addresser(&self) -> &Addresser {
        &self.addresser
    }

    pub fn create_owner(&self, name: &str, timestamp: Timestamp) -> Result<Batch, ClientError> {
        let owner = self.addresser.owner_address(&self.public_key());
        let data = PayloadData::CreateOwner(CreateOwnerAction {
            name: name.to_string(),
        });
        self.make_batch(data, timestamp, vec![owner.clone()], vec![owner])
    }

    pub fn create_record(
        &self,
        action: CreateRecordAction,
        timestamp: Timestamp,
    ) -> Result<Batch, ClientError> {
        let owner = self.addresser.owner_address(&self.public_key());
        let record = self.addresser.record_address(&action.record_id);
        self.make_batch(
            PayloadData::CreateRecord(action),
            timestamp,
            vec![owner, record.clone()],
            vec![record],
        )
    }

    pub fn transfer_record(
        &self,
        record_id: &str,
        receiving_owner: &str,
        timestamp: Timestamp,
    ) -> Result<Batch, ClientError> {
        let owner = self.addresser.owner_address(&self.public_key());
        let receiver = self.addresser.owner_address(receiving_owner);
        let record = self.addresser.record_address(record_id);
        let data = PayloadData::TransferRecord(TransferRecordAction {
            record_id: record_id.to_string(),
            receiving_owner: receiving_owner.to_string(),
        });
        self.make_batch(
            data,
            timestamp,
            vec![owner, receiver, record.clone()],
            vec![record],
        )
    }

    pub fn update_record(
        &self,
        action: UpdateRecordAction,
        timestamp: Timestamp,
    ) -> Result<Batch, ClientError> {
        let owner = self.addresser.owner_address(&self.public_key());
        let record = self.addresser.record_address(&action.record_id);
        self.make_batch(
            PayloadData::UpdateRecord(action),
            timestamp,
            vec![owner, record.clone()],
            vec![record],
        )
    }

    /// Sign a transaction carrying `data` and wrap it in a signed batch.
    pub fn make_batch(
        &self,
        data: PayloadData,
        timestamp: Timestamp,
        inputs: Vec<String>,
        outputs: Vec<String>,
    ) -> Result<Batch, ClientError> {
        let payload = PnrdPayload::new(data, timestamp).encode()?;
        let transaction = self.make_transaction(payload, inputs, outputs)?;

        let header = BatchHeader {
            signer_public_key: self.batcher_public_key(),
            transaction_ids: vec![transaction.header_signature.clone()],
        }
        .encode()?;

        Ok(Batch {
            header_signature: self.batch_signer.sign_hex(&header),
            header,
            transactions: vec![transaction],
        })
    }

    fn make_transaction(
        &self,
        payload: Vec<u8>,
        inputs: Vec<String>,
        outputs: Vec<String>,
    ) -> Result<Transaction, ClientError> {
        let family = self.addresser.family();
        let header = TransactionHeader {
            family_name: family.name.clone(),
            family_version: family.version.clone(),
            inputs,
            outputs,
            signer_public_key: self.public_key(),
            batcher_public_key: self.batcher_public_key(),
            dependencies: Vec::new(),
            payload_sha512: hex::encode(Sha512::digest(&payload)),
            nonce: hex::encode(rand::thread_rng().gen::<[u8; 16]>()),
        }
        .encode()?;

        Ok(Transaction {
            header_signature: self.signer.sign_hex(&header),
            header,
            payload,
        })
    }
}

/// Submission body for a single batch.
pub fn batch_list(batch: Batch) -> BatchList {
    BatchList {
        batches: vec![batch],
    }
}

// =============================================================================
// TESTS
// =============================================================================
