//! # Stored Entities
//!
//! Owners and provenance records as persisted inside address containers.
//!
//! ## Invariants
//!
//! | Entity | Invariant |
//! |--------|-----------|
//! | `Owner` | `public_key` unique; never mutated after creation |
//! | `Record` | `record_id` unique; `tag_id` immutable |
//! | `Record` | `owners` non-empty; append-only |
//! | `Record` | `histories` append-only, never reordered |

use serde::{Deserialize, Serialize};

/// Unix timestamp in seconds, as supplied by the submitting client.
pub type Timestamp = u64;

/// A registered asset owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Hex public key of the signer that registered this owner.
    pub public_key: String,
    /// Human-readable name.
    pub name: String,
    /// Creation timestamp.
    pub timestamp: Timestamp,
}

/// One custody step in a record's ownership chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipEntry {
    /// Public key of the owner taking custody.
    pub owner_id: String,
    /// When custody was taken.
    pub timestamp: Timestamp,
}

/// Petri-net state captured at a tag reading.
///
/// Stored and returned verbatim; the ledger never interprets it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSnapshot {
    /// Place labels.
    pub places: Vec<String>,
    /// Transition labels.
    pub transitions: Vec<String>,
    /// Incidence matrix, one row per place.
    pub incidence_matrix: Vec<Vec<i64>>,
    /// Marking vector (tokens per place).
    pub token: Vec<i64>,
}

/// One inspection/process event in a record's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    /// Reader that scanned the tag.
    pub reader_id: String,
    /// Antenna of the reader.
    pub ant_id: String,
    /// Free-form situation label.
    pub situation: String,
    /// Process state at the time of the reading.
    pub snapshot: ProcessSnapshot,
    /// When the event happened.
    pub timestamp: Timestamp,
}

/// Provenance record bound to a physical tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique record identifier.
    pub record_id: String,
    /// Tag the record was created against. Immutable.
    pub tag_id: String,
    /// Ownership chain in append order.
    pub owners: Vec<OwnershipEntry>,
    /// Event history in append order.
    pub histories: Vec<HistoryEvent>,
}

impl Record {
    /// Current owner: the ownership entry with the greatest timestamp.
    ///
    /// Entries sharing the greatest timestamp resolve to the one appended
    /// last. Returns `None` only for a record with an empty chain, which the
    /// processor never writes.
    pub fn current_owner(&self) -> Option<&OwnershipEntry> {
        // `max_by_key` yields the last of several equal maxima.
        self.owners.iter().max_by_key(|entry| entry.timestamp)
    }

    /// Whether `public_key` is the current owner.
    pub fn is_owned_by(&self, public_key: &str) -> bool {
        self.current_owner()
            .is_some_and(|entry| entry.owner_id == public_key)
    }
}

// =============================================================================
// TESTS
// =============================================================================
