//! # Transaction Payload Schema
//!
//! Wire form of the family payload. The `action` tag travels as a raw code
//! so that the processor, not the deserializer, decides what an unknown code
//! means; the populated `data` variant must agree with it.

use crate::codec;
use crate::entities::{ProcessSnapshot, Timestamp};
use crate::errors::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Actions understood by the family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Register the signer as an owner.
    CreateOwner,
    /// Create a record against a tag.
    CreateRecord,
    /// Hand a record to another owner.
    TransferRecord,
    /// Append a history event to a record.
    UpdateRecord,
}

impl Action {
    /// Wire code of this action.
    pub const fn code(self) -> u32 {
        match self {
            Self::CreateOwner => 0,
            Self::CreateRecord => 1,
            Self::TransferRecord => 2,
            Self::UpdateRecord => 3,
        }
    }

    /// Action for a wire code, if known.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::CreateOwner),
            1 => Some(Self::CreateRecord),
            2 => Some(Self::TransferRecord),
            3 => Some(Self::UpdateRecord),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateOwner => "CREATE_OWNER",
            Self::CreateRecord => "CREATE_RECORD",
            Self::TransferRecord => "TRANSFER_RECORD",
            Self::UpdateRecord => "UPDATE_RECORD",
        };
        f.write_str(name)
    }
}

/// CREATE_OWNER data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOwnerAction {
    /// Owner display name.
    pub name: String,
}

/// CREATE_RECORD data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecordAction {
    pub record_id: String,
    pub tag_id: String,
    pub reader_id: String,
    pub ant_id: String,
    pub situation: String,
    pub places: Vec<String>,
    pub transitions: Vec<String>,
    pub incidence_matrix: Vec<Vec<i64>>,
    pub token: Vec<i64>,
}

/// TRANSFER_RECORD data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecordAction {
    pub record_id: String,
    /// Public key of the owner receiving custody.
    pub receiving_owner: String,
}

/// UPDATE_RECORD data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecordAction {
    pub record_id: String,
    pub reader_id: String,
    pub ant_id: String,
    pub situation: String,
    pub places: Vec<String>,
    pub transitions: Vec<String>,
    pub incidence_matrix: Vec<Vec<i64>>,
    pub token: Vec<i64>,
}

impl CreateRecordAction {
    /// Process snapshot carried by this action.
    pub fn snapshot(&self) -> ProcessSnapshot {
        ProcessSnapshot {
            places: self.places.clone(),
            transitions: self.transitions.clone(),
            incidence_matrix: self.incidence_matrix.clone(),
            token: self.token.clone(),
        }
    }
}

impl UpdateRecordAction {
    /// Process snapshot carried by this action.
    pub fn snapshot(&self) -> ProcessSnapshot {
        ProcessSnapshot {
            places: self.places.clone(),
            transitions: self.transitions.clone(),
            incidence_matrix: self.incidence_matrix.clone(),
            token: self.token.clone(),
        }
    }
}

/// One-of action data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadData {
    CreateOwner(CreateOwnerAction),
    CreateRecord(CreateRecordAction),
    TransferRecord(TransferRecordAction),
    UpdateRecord(UpdateRecordAction),
}

impl PayloadData {
    /// Action this data variant belongs to.
    pub fn action(&self) -> Action {
        match self {
            Self::CreateOwner(_) => Action::CreateOwner,
            Self::CreateRecord(_) => Action::CreateRecord,
            Self::TransferRecord(_) => Action::TransferRecord,
            Self::UpdateRecord(_) => Action::UpdateRecord,
        }
    }
}

/// Family payload as carried in a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnrdPayload {
    /// Raw action code (see [`Action::code`]).
    pub action: u32,
    /// Client-supplied timestamp.
    pub timestamp: Timestamp,
    /// Populated action data.
    pub data: Option<PayloadData>,
}

impl PnrdPayload {
    /// Well-formed payload whose action tag matches `data`.
    pub fn new(data: PayloadData, timestamp: Timestamp) -> Self {
        Self {
            action: data.action().code(),
            timestamp,
            data: Some(data),
        }
    }

    /// Canonical payload bytes.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(self)
    }

    /// Parse payload bytes without checking tag/data consistency.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::decode(bytes)
    }
}
