//! # State Adapter
//!
//! Typed access to owner and record containers over a [`StateContext`].
//!
//! Every address holds a whole container. Writes always re-encode the full
//! container read in the same call, so colliding entries survive. Each call
//! into the context is bounded by the configured store timeout and is never
//! retried.

use crate::domain::rules::validate_record_owner;
use crate::domain::ContainerEntry;
use crate::errors::{ApplyError, StoreError, ValidationError};
use crate::ports::outbound::{StateContext, StateEntry};
use pn_01_addressing::Addresser;
use shared_types::{
    Container, CreateRecordAction, HistoryEvent, Owner, OwnershipEntry, ProcessSnapshot, Record,
    Timestamp, UpdateRecordAction,
};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Fields of a history event as carried by CREATE_RECORD and UPDATE_RECORD.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventInput {
    pub reader_id: String,
    pub ant_id: String,
    pub situation: String,
    pub snapshot: ProcessSnapshot,
}

impl EventInput {
    fn at(self, timestamp: Timestamp) -> HistoryEvent {
        HistoryEvent {
            reader_id: self.reader_id,
            ant_id: self.ant_id,
            situation: self.situation,
            snapshot: self.snapshot,
            timestamp,
        }
    }
}

impl From<&CreateRecordAction> for EventInput {
    fn from(action: &CreateRecordAction) -> Self {
        Self {
            reader_id: action.reader_id.clone(),
            ant_id: action.ant_id.clone(),
            situation: action.situation.clone(),
            snapshot: action.snapshot(),
        }
    }
}

impl From<&UpdateRecordAction> for EventInput {
    fn from(action: &UpdateRecordAction) -> Self {
        Self {
            reader_id: action.reader_id.clone(),
            ant_id: action.ant_id.clone(),
            situation: action.situation.clone(),
            snapshot: action.snapshot(),
        }
    }
}

/// Container-aware view of family state for one transaction.
pub struct PnrdState<'a> {
    context: &'a dyn StateContext,
    addresser: &'a Addresser,
    timeout: Duration,
}

impl<'a> PnrdState<'a> {
    pub fn new(context: &'a dyn StateContext, addresser: &'a Addresser, timeout: Duration) -> Self {
        Self {
            context,
            addresser,
            timeout,
        }
    }

    // =========================================================================
    // GENERIC CONTAINER ACCESS
    // =========================================================================

    /// Container stored at `address`. An absent address is an empty container.
    pub async fn get<E: ContainerEntry>(&self, address: &str) -> Result<Container<E>, StoreError> {
        let Some(bytes) = self.read(address).await? else {
            return Ok(Container::default());
        };
        Container::decode(&bytes).map_err(|e| StoreError::CorruptContainer {
            address: address.to_string(),
            reason: e.to_string(),
        })
    }

    /// Entry with natural key `key`, if stored.
    pub async fn find<E: ContainerEntry>(&self, key: &str) -> Result<Option<E>, StoreError> {
        let address = self.addresser.address(E::KIND, key);
        let container = self.get::<E>(&address).await?;
        Ok(container.find(key).cloned())
    }

    /// Mutate the entry keyed by `key` in place, or append `create()` when
    /// absent, then write the whole container back with a single write.
    ///
    /// Either closure may refuse with an error, in which case nothing is
    /// written.
    pub async fn upsert<E, Err, M, C>(&self, key: &str, mutate: M, create: C) -> Result<(), Err>
    where
        E: ContainerEntry,
        Err: From<StoreError>,
        M: FnOnce(&mut E) -> Result<(), Err>,
        C: FnOnce() -> Result<E, Err>,
    {
        let address = self.addresser.address(E::KIND, key);
        let mut container = self.get::<E>(&address).await?;

        match container.find_mut(key) {
            Some(entry) => mutate(entry)?,
            None => container.push(create()?),
        }

        let bytes = container.encode().map_err(|e| StoreError::Encoding {
            address: address.clone(),
            reason: e.to_string(),
        })?;
        self.write(address, bytes).await?;
        Ok(())
    }

    // =========================================================================
    // TYPED HELPERS
    // =========================================================================

    pub async fn get_owner(&self, public_key: &str) -> Result<Option<Owner>, StoreError> {
        self.find::<Owner>(public_key).await
    }

    pub async fn get_record(&self, record_id: &str) -> Result<Option<Record>, StoreError> {
        self.find::<Record>(record_id).await
    }

    /// Store a new owner. An existing entry with the same key is never
    /// replaced.
    pub async fn set_owner(&self, owner: Owner) -> Result<(), ApplyError> {
        let key = owner.public_key.clone();
        self.upsert::<Owner, ApplyError, _, _>(
            &key,
            |existing| {
                Err(ValidationError::OwnerAlreadyExists {
                    public_key: existing.public_key.clone(),
                }
                .into())
            },
            || Ok(owner),
        )
        .await
    }

    /// Store a new record whose only owner is `signer` and whose only event
    /// is `event`, both at `timestamp`.
    pub async fn set_record(
        &self,
        signer: &str,
        record_id: &str,
        tag_id: &str,
        event: EventInput,
        timestamp: Timestamp,
    ) -> Result<(), ApplyError> {
        let record = Record {
            record_id: record_id.to_string(),
            tag_id: tag_id.to_string(),
            owners: vec![OwnershipEntry {
                owner_id: signer.to_string(),
                timestamp,
            }],
            histories: vec![event.at(timestamp)],
        };
        self.upsert::<Record, ApplyError, _, _>(
            record_id,
            |_| {
                Err(ValidationError::RecordAlreadyExists {
                    record_id: record_id.to_string(),
                }
                .into())
            },
            || Ok(record),
        )
        .await
    }

    /// Append `receiving_owner` to the ownership chain, provided `signer` is
    /// the current owner.
    pub async fn transfer_record(
        &self,
        signer: &str,
        record_id: &str,
        receiving_owner: &str,
        timestamp: Timestamp,
    ) -> Result<(), ApplyError> {
        self.upsert::<Record, ApplyError, _, _>(
            record_id,
            |record| {
                validate_record_owner(record, signer)?;
                record.owners.push(OwnershipEntry {
                    owner_id: receiving_owner.to_string(),
                    timestamp,
                });
                Ok(())
            },
            || Err(record_not_found(record_id)),
        )
        .await
    }

    /// Append a history event, provided `signer` is the current owner.
    pub async fn update_record(
        &self,
        signer: &str,
        record_id: &str,
        event: EventInput,
        timestamp: Timestamp,
    ) -> Result<(), ApplyError> {
        self.upsert::<Record, ApplyError, _, _>(
            record_id,
            |record| {
                validate_record_owner(record, signer)?;
                record.histories.push(event.at(timestamp));
                Ok(())
            },
            || Err(record_not_found(record_id)),
        )
        .await
    }

    // =========================================================================
    // BOUNDED CONTEXT CALLS
    // =========================================================================

    async fn read(&self, address: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let addresses = [address.to_string()];
        let entries = self
            .bounded("get", address, self.context.get_state(&addresses))
            .await??;

        debug!(address, found = !entries.is_empty(), "state read");
        Ok(entries
            .into_iter()
            .find(|entry| entry.address == address)
            .map(|entry| entry.data)
            .filter(|data| !data.is_empty()))
    }

    async fn write(&self, address: String, data: Vec<u8>) -> Result<(), StoreError> {
        let len = data.len();
        let entries = vec![StateEntry::new(address.clone(), data)];
        let set = self
            .bounded("set", &address, self.context.set_state(entries))
            .await??;

        if !set.iter().any(|a| *a == address) {
            return Err(StoreError::Unavailable(format!(
                "store did not acknowledge write to {address}"
            )));
        }
        debug!(address = %address, bytes = len, "state write");
        Ok(())
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        address: &str,
        call: impl Future<Output = T>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| StoreError::Timeout {
                operation,
                address: address.to_string(),
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            })
    }
}

fn record_not_found(record_id: &str) -> ApplyError {
    ValidationError::RecordNotFound {
        record_id: record_id.to_string(),
    }
    .into()
}

// =============================================================================
// TESTS
// =============================================================================
