//! # PN-02 Transaction Processor - Validation & Apply Engine
//!
//! Deterministic handler for the PNRD-Net transaction family. The host ledger
//! orders transactions and hands each one, with a per-transaction state
//! context, to [`PnrdTransactionHandler::apply`].
//!
//! ## Actions
//!
//! | Action | Preconditions | Effect |
//! |--------|---------------|--------|
//! | `CREATE_OWNER` | no owner for signer key | append `Owner{signer, name, ts}` |
//! | `CREATE_RECORD` | signer registered; record id non-empty; id unused; tag non-empty | new record owned by signer with one event |
//! | `TRANSFER_RECORD` | receiver registered; record exists; signer is current owner | append `{receiver, ts}` to owners |
//! | `UPDATE_RECORD` | record exists; signer is current owner | append event to histories |
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Reject without side effects | `service.rs` - all checks precede the single write |
//! | Colliding entries preserved | `adapters/state.rs` - `upsert()` rewrites the full container |
//! | Current owner = max timestamp | `shared_types::Record::current_owner()` |
//! | Future skew bounded | `domain/rules.rs` - `validate_timestamp()` |
//! | Bounded store calls | `adapters/state.rs` - `bounded()` |
//!
//! ## Usage Example
//!
//! ```ignore
//! use pn_02_transaction_processor::prelude::*;
//!
//! let handler = PnrdTransactionHandler::new(ProcessorConfig::from_env());
//! handler.apply(&request, &context).await?;
//! ```

#![warn(clippy::all)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::{EventInput, InMemoryContext, PnrdState};
    pub use crate::config::{ConfigError, ProcessorConfig};
    pub use crate::domain::{ContainerEntry, DecodedPayload, TransactionAction};
    pub use crate::errors::{ApplyError, ContextError, DecodeError, StoreError, ValidationError};
    pub use crate::ports::inbound::{TransactionHandler, TransactionRequest};
    pub use crate::ports::outbound::{
        FixedTimeSource, StateContext, StateEntry, SystemTimeSource, TimeSource,
    };
    pub use crate::service::PnrdTransactionHandler;
}

pub use errors::ApplyError;
pub use service::PnrdTransactionHandler;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
