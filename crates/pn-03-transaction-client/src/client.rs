//! # Ledger Client
//!
//! Build, sign, post and wait in one call per action.

use crate::builder::TransactionBuilder;
use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::signing::Signer;
use crate::submission::{LedgerEntry, SubmissionClient, SubmissionOutcome};
use shared_types::{CreateRecordAction, Owner, Record, Timestamp, UpdateRecordAction};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Default time to wait for a batch to reach a terminal status.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(1);

/// Signer-bound façade over the builder and the submission client.
pub struct LedgerClient {
    builder: TransactionBuilder,
    submission: SubmissionClient,
    wait: Duration,
}

impl LedgerClient {
    pub fn new(config: ClientConfig, signer: Arc<dyn Signer>) -> Result<Self, ClientError> {
        let submission = SubmissionClient::new(config)?;
        let builder = TransactionBuilder::new(signer, None, submission.addresser().clone());
        Ok(Self {
            builder,
            submission,
            wait: DEFAULT_WAIT,
        })
    }

    /// Sign batches with `batch_signer` instead of the transaction signer.
    pub fn with_batch_signer(mut self, batch_signer: Arc<dyn Signer>) -> Self {
        self.builder = TransactionBuilder::new(
            self.builder.signer(),
            Some(batch_signer),
            self.submission.addresser().clone(),
        );
        self
    }

    /// Override the per-submission wait budget.
    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    pub fn public_key(&self) -> String {
        self.builder.public_key()
    }

    pub fn submission(&self) -> &SubmissionClient {
        &self.submission
    }

    #[instrument(skip(self))]
    pub async fn create_owner(
        &self,
        name: &str,
        timestamp: Timestamp,
    ) -> Result<SubmissionOutcome, ClientError> {
        let batch = self.builder.create_owner(name, timestamp)?;
        self.submission.post_batch(batch, self.wait).await
    }

    #[instrument(skip(self, action), fields(record_id = %action.record_id))]
    pub async fn create_record(
        &self,
        action: CreateRecordAction,
        timestamp: Timestamp,
    ) -> Result<SubmissionOutcome, ClientError> {
        let batch = self.builder.create_record(action, timestamp)?;
        self.submission.post_batch(batch, self.wait).await
    }

    #[instrument(skip(self))]
    pub async fn transfer_record(
        &self,
        record_id: &str,
        receiving_owner: &str,
        timestamp: Timestamp,
    ) -> Result<SubmissionOutcome, ClientError> {
        let batch = self
            .builder
            .transfer_record(record_id, receiving_owner, timestamp)?;
        self.submission.post_batch(batch, self.wait).await
    }

    #[instrument(skip(self, action), fields(record_id = %action.record_id))]
    pub async fn update_record(
        &self,
        action: UpdateRecordAction,
        timestamp: Timestamp,
    ) -> Result<SubmissionOutcome, ClientError> {
        let batch = self.builder.update_record(action, timestamp)?;
        self.submission.post_batch(batch, self.wait).await
    }

    pub async fn owner(&self, public_key: &str) -> Result<Option<Owner>, ClientError> {
        self.submission.fetch_owner(public_key).await
    }

    pub async fn record(&self, record_id: &str) -> Result<Option<Record>, ClientError> {
        self.submission.fetch_record(record_id).await
    }

    pub async fn namespace(&self) -> Result<Vec<LedgerEntry>, ClientError> {
        self.submission.fetch_namespace().await
    }
}
