//! # Transaction Handler Service
//!
//! Validates and applies PNRD-Net transactions against host state.
//!
//! ## Processing Order
//!
//! 1. Family/version header check
//! 2. Payload decode
//! 3. Timestamp tolerance check
//! 4. Per-action preconditions, then at most one write
//!
//! The handler keeps no mutable state between transactions. Every replica
//! given the same state and transaction reaches the same outcome.

use crate::adapters::state::{EventInput, PnrdState};
use crate::config::ProcessorConfig;
use crate::domain::payload::{DecodedPayload, TransactionAction};
use crate::domain::rules::{validate_record_id, validate_tag, validate_timestamp};
use crate::errors::{ApplyError, ValidationError};
use crate::ports::inbound::{TransactionHandler, TransactionRequest};
use crate::ports::outbound::{StateContext, SystemTimeSource, TimeSource};
use async_trait::async_trait;
use pn_01_addressing::Addresser;
use shared_types::{
    CreateOwnerAction, CreateRecordAction, Owner, Timestamp, TransferRecordAction,
    UpdateRecordAction,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// PNRD-Net transaction family handler.
pub struct PnrdTransactionHandler<T: TimeSource = SystemTimeSource> {
    config: ProcessorConfig,
    addresser: Addresser,
    time_source: Arc<T>,
}

impl PnrdTransactionHandler<SystemTimeSource> {
    /// Handler on the system clock with SHA-512 addressing.
    pub fn new(config: ProcessorConfig) -> Self {
        Self::with_time_source(config, Arc::new(SystemTimeSource))
    }
}

impl<T: TimeSource> PnrdTransactionHandler<T> {
    /// Handler with an injected clock.
    pub fn with_time_source(config: ProcessorConfig, time_source: Arc<T>) -> Self {
        let addresser = Addresser::new(config.family.clone());
        Self {
            config,
            addresser,
            time_source,
        }
    }

    /// Replace the addresser (e.g. one with an injected key hasher).
    ///
    /// The addresser must derive for the configured family.
    pub fn with_addresser(mut self, addresser: Addresser) -> Self {
        self.addresser = addresser;
        self
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn addresser(&self) -> &Addresser {
        &self.addresser
    }

    fn check_family(&self, request: &TransactionRequest) -> Result<(), ValidationError> {
        let family = &self.config.family;
        if request.header.family_name != family.name
            || request.header.family_version != family.version
        {
            return Err(ValidationError::UnsupportedFamily {
                name: request.header.family_name.clone(),
                version: request.header.family_version.clone(),
                expected: family.to_string(),
            });
        }
        Ok(())
    }

    async fn process(
        &self,
        request: &TransactionRequest,
        context: &dyn StateContext,
    ) -> Result<(), ApplyError> {
        self.check_family(request)?;

        let payload = DecodedPayload::decode(&request.payload)?;

        validate_timestamp(
            payload.timestamp,
            self.time_source.now(),
            self.config.sync_tolerance_secs,
        )?;

        let state = PnrdState::new(context, &self.addresser, self.config.store_timeout);
        let signer = request.signer();
        let ts = payload.timestamp;

        match &payload.action {
            TransactionAction::CreateOwner(data) => create_owner(&state, signer, data, ts).await,
            TransactionAction::CreateRecord(data) => create_record(&state, signer, data, ts).await,
            TransactionAction::TransferRecord(data) => {
                transfer_record(&state, signer, data, ts).await
            }
            TransactionAction::UpdateRecord(data) => update_record(&state, signer, data, ts).await,
        }
    }
}

#[async_trait]
impl<T: TimeSource + 'static> TransactionHandler for PnrdTransactionHandler<T> {
    fn family_name(&self) -> &str {
        &self.config.family.name
    }

    fn family_versions(&self) -> Vec<String> {
        vec![self.config.family.version.clone()]
    }

    fn namespaces(&self) -> Vec<String> {
        vec![self.addresser.namespace().to_string()]
    }

    #[instrument(skip(self, request, context), fields(signer = %request.signer(), txn = %request.signature))]
    async fn apply(
        &self,
        request: &TransactionRequest,
        context: &dyn StateContext,
    ) -> Result<(), ApplyError> {
        match self.process(request, context).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_invalid_transaction() => {
                warn!(error = %err, "transaction rejected");
                Err(err)
            }
            Err(err) => {
                warn!(error = %err, "transaction failed on state store");
                Err(err)
            }
        }
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

async fn create_owner(
    state: &PnrdState<'_>,
    signer: &str,
    data: &CreateOwnerAction,
    timestamp: Timestamp,
) -> Result<(), ApplyError> {
    state
        .set_owner(Owner {
            public_key: signer.to_string(),
            name: data.name.clone(),
            timestamp,
        })
        .await?;

    info!(action = "CREATE_OWNER", owner = %signer, name = %data.name, "owner created");
    Ok(())
}

async fn create_record(
    state: &PnrdState<'_>,
    signer: &str,
    data: &CreateRecordAction,
    timestamp: Timestamp,
) -> Result<(), ApplyError> {
    ensure_owner_exists(state, signer).await?;
    validate_record_id(&data.record_id)?;

    if state.get_record(&data.record_id).await?.is_some() {
        return Err(ValidationError::RecordAlreadyExists {
            record_id: data.record_id.clone(),
        }
        .into());
    }

    validate_tag(&data.record_id, &data.tag_id)?;

    state
        .set_record(
            signer,
            &data.record_id,
            &data.tag_id,
            EventInput::from(data),
            timestamp,
        )
        .await?;

    info!(
        action = "CREATE_RECORD",
        owner = %signer,
        record_id = %data.record_id,
        tag_id = %data.tag_id,
        "record created"
    );
    Ok(())
}

async fn transfer_record(
    state: &PnrdState<'_>,
    signer: &str,
    data: &TransferRecordAction,
    timestamp: Timestamp,
) -> Result<(), ApplyError> {
    ensure_owner_exists(state, &data.receiving_owner).await?;

    // Existence and current-owner checks run against the container read for the write.
    state
        .transfer_record(signer, &data.record_id, &data.receiving_owner, timestamp)
        .await?;

    info!(
        action = "TRANSFER_RECORD",
        from = %signer,
        to = %data.receiving_owner,
        record_id = %data.record_id,
        "record transferred"
    );
    Ok(())
}

async fn update_record(
    state: &PnrdState<'_>,
    signer: &str,
    data: &UpdateRecordAction,
    timestamp: Timestamp,
) -> Result<(), ApplyError> {
    state
        .update_record(signer, &data.record_id, EventInput::from(data), timestamp)
        .await?;

    info!(
        action = "UPDATE_RECORD",
        owner = %signer,
        record_id = %data.record_id,
        situation = %data.situation,
        "record updated"
    );
    Ok(())
}

async fn ensure_owner_exists(state: &PnrdState<'_>, public_key: &str) -> Result<(), ApplyError> {
    if state.get_owner(public_key).await?.is_none() {
        return Err(ValidationError::OwnerNotFound {
            public_key: public_key.to_string(),
        }
        .into());
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
