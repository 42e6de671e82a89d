//! # Error Types
//!
//! Every outcome other than commit. Messages name the violated precondition
//! and the offending key so they can be surfaced verbatim to submitters and
//! audit trails.

use shared_types::Action;
use thiserror::Error;

// =============================================================================
// DECODE ERRORS
// =============================================================================

/// Payload bytes could not be turned into a known action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Bytes are not a valid payload encoding.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// Action code outside the known set.
    #[error("unhandled action: code {0}")]
    UnhandledAction(u32),

    /// Action declared but no data populated.
    #[error("payload for {action} carries no action data")]
    MissingData { action: Action },

    /// Populated data belongs to a different action than declared.
    #[error("action does not match payload data: declared {declared}, data is {actual}")]
    ActionMismatch { declared: Action, actual: Action },
}

// =============================================================================
// VALIDATION ERRORS
// =============================================================================

/// A precondition of the declared action does not hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Transaction addressed to another family or version.
    #[error("unsupported family {name}/{version}: this handler processes {expected}")]
    UnsupportedFamily {
        name: String,
        version: String,
        expected: String,
    },

    /// Timestamp beyond local time plus tolerance.
    #[error(
        "Timestamp must be less than local time. Expected {timestamp} in ({now}-{tolerance}, {now}+{tolerance})"
    )]
    TimestampTooFarAhead {
        timestamp: u64,
        now: u64,
        tolerance: u64,
    },

    #[error("Owner with the public key {public_key} already exists")]
    OwnerAlreadyExists { public_key: String },

    #[error("Owner with the public key {public_key} does not exist")]
    OwnerNotFound { public_key: String },

    #[error("No record ID provided")]
    MissingRecordId,

    #[error("Identifier {record_id} belongs to an existing record")]
    RecordAlreadyExists { record_id: String },

    #[error("Incorrect TAG for record {record_id}: tag id must not be empty")]
    InvalidTag { record_id: String },

    #[error("Record with the record id {record_id} does not exist")]
    RecordNotFound { record_id: String },

    /// Stored record has no ownership entry; nobody may mutate it.
    #[error("Record {record_id} has an empty ownership chain")]
    EmptyOwnershipChain { record_id: String },

    #[error(
        "Transaction signer {signer} is not the owner of record {record_id}: current owner is {current_owner}"
    )]
    NotRecordOwner {
        record_id: String,
        signer: String,
        current_owner: String,
    },
}

// =============================================================================
// STORE ERRORS
// =============================================================================

/// The external state store failed the transaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A store call exceeded its bound. Never retried here.
    #[error("state {operation} at {address} timed out after {timeout_ms}ms")]
    Timeout {
        operation: &'static str,
        address: String,
        timeout_ms: u64,
    },

    /// The store reported a failure.
    #[error("state store unavailable: {0}")]
    Unavailable(String),

    /// Bytes at an address are not a valid container.
    #[error("corrupt container at {address}: {reason}")]
    CorruptContainer { address: String, reason: String },

    /// A container could not be encoded for writing.
    #[error("container encoding failed at {address}: {reason}")]
    Encoding { address: String, reason: String },
}

// =============================================================================
// CONTEXT ERRORS
// =============================================================================

/// Failure reported by a [`StateContext`](crate::ports::StateContext)
/// implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// The store could not be reached.
    #[error("context unreachable: {0}")]
    Unreachable(String),

    /// The host refused access to an address.
    #[error("access to {address} not authorized")]
    AuthorizationViolation { address: String },
}

impl From<ContextError> for StoreError {
    fn from(err: ContextError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

// =============================================================================
// APPLY ERRORS
// =============================================================================

/// Outcome of a rejected or failed `apply`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplyError {
    /// True for rejections (decode/validation): the host aborts the
    /// transaction and reports the message. False for store failures, whose
    /// retry or halt policy belongs to the host.
    pub fn is_invalid_transaction(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Validation(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================
