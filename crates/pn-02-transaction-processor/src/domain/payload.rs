//! # Payload Decoder
//!
//! Turns opaque payload bytes into a closed, fully-typed action. Nothing
//! downstream ever sees the raw action code.

use crate::errors::DecodeError;
use shared_types::{
    Action, CreateOwnerAction, CreateRecordAction, PayloadData, PnrdPayload, Timestamp,
    TransferRecordAction, UpdateRecordAction,
};

/// One of the four actions, with its data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionAction {
    CreateOwner(CreateOwnerAction),
    CreateRecord(CreateRecordAction),
    TransferRecord(TransferRecordAction),
    UpdateRecord(UpdateRecordAction),
}

impl TransactionAction {
    /// Action kind.
    pub fn kind(&self) -> Action {
        match self {
            Self::CreateOwner(_) => Action::CreateOwner,
            Self::CreateRecord(_) => Action::CreateRecord,
            Self::TransferRecord(_) => Action::TransferRecord,
            Self::UpdateRecord(_) => Action::UpdateRecord,
        }
    }
}

impl From<PayloadData> for TransactionAction {
    fn from(data: PayloadData) -> Self {
        match data {
            PayloadData::CreateOwner(a) => Self::CreateOwner(a),
            PayloadData::CreateRecord(a) => Self::CreateRecord(a),
            PayloadData::TransferRecord(a) => Self::TransferRecord(a),
            PayloadData::UpdateRecord(a) => Self::UpdateRecord(a),
        }
    }
}

/// A payload whose action tag and data agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedPayload {
    /// Client-supplied timestamp.
    pub timestamp: Timestamp,
    /// Typed action.
    pub action: TransactionAction,
}

impl DecodedPayload {
    /// Decode and check payload bytes.
    ///
    /// Order of checks: wire format, action code, data presence, then
    /// tag/data agreement.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let payload =
            PnrdPayload::decode(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))?;

        let declared =
            Action::from_code(payload.action).ok_or(DecodeError::UnhandledAction(payload.action))?;

        let data = payload
            .data
            .ok_or(DecodeError::MissingData { action: declared })?;

        let actual = data.action();
        if actual != declared {
            return Err(DecodeError::ActionMismatch { declared, actual });
        }

        Ok(Self {
            timestamp: payload.timestamp,
            action: data.into(),
        })
    }

    /// Action kind.
    pub fn kind(&self) -> Action {
        self.action.kind()
    }
}

// =============================================================================
// TESTS
// =============================================================================
