//! # Validation Rules
//!
//! Stateless precondition checks shared by the action handlers. Each takes
//! already-loaded values and returns the exact rejection to surface.

use crate::errors::ValidationError;
use shared_types::{Record, Timestamp};

/// Reject timestamps that lead `now` by more than `tolerance` seconds.
///
/// Timestamps in the past are always accepted.
pub fn validate_timestamp(
    timestamp: Timestamp,
    now: Timestamp,
    tolerance: u64,
) -> Result<(), ValidationError> {
    if timestamp.saturating_sub(now) > tolerance {
        return Err(ValidationError::TimestampTooFarAhead {
            timestamp,
            now,
            tolerance,
        });
    }
    Ok(())
}

/// Record ids must be non-empty.
pub fn validate_record_id(record_id: &str) -> Result<(), ValidationError> {
    if record_id.is_empty() {
        return Err(ValidationError::MissingRecordId);
    }
    Ok(())
}

/// Tag ids must be non-empty.
pub fn validate_tag(record_id: &str, tag_id: &str) -> Result<(), ValidationError> {
    if tag_id.is_empty() {
        return Err(ValidationError::InvalidTag {
            record_id: record_id.to_string(),
        });
    }
    Ok(())
}

/// The signer must be the record's current owner.
pub fn validate_record_owner(record: &Record, signer: &str) -> Result<(), ValidationError> {
    let current = record
        .current_owner()
        .ok_or_else(|| ValidationError::EmptyOwnershipChain {
            record_id: record.record_id.clone(),
        })?;

    if current.owner_id != signer {
        return Err(ValidationError::NotRecordOwner {
            record_id: record.record_id.clone(),
            signer: signer.to_string(),
            current_owner: current.owner_id.clone(),
        });
    }
    Ok(())
}
