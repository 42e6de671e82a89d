//! # PN-03 Transaction Client
//!
//! Client side of the PNRD-Net family: key handling, transaction/batch
//! construction and REST submission with bounded status polling.
//!
//! ## Components
//!
//! | Component | Location | Purpose |
//! |-----------|----------|---------|
//! | Signer | `signing.rs` | secp256k1 keys and header signatures |
//! | Builder | `builder.rs` | payload → signed transaction → signed batch |
//! | Submission | `submission.rs` | POST batches, poll status, query state |
//! | Ledger client | `client.rs` | one call per action |
//!
//! ## Usage Example
//!
//! ```ignore
//! use pn_03_transaction_client::prelude::*;
//!
//! let (public, private) = new_key_pair();
//! let signer = Arc::new(Secp256k1Signer::from_private_key_hex(&private)?);
//! let client = LedgerClient::new(ClientConfig::from_env(), signer)?;
//! let outcome = client.create_owner("alice", now).await?;
//! ```

#![warn(clippy::all)]

pub mod builder;
pub mod client;
pub mod config;
pub mod errors;
pub mod signing;
pub mod submission;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::builder::{batch_list, TransactionBuilder};
    pub use crate::client::{LedgerClient, DEFAULT_WAIT};
    pub use crate::config::{ClientConfig, DEFAULT_REST_API_URL};
    pub use crate::errors::ClientError;
    pub use crate::signing::{new_key_pair, Secp256k1Signer, Signer};
    pub use crate::submission::{
        BatchStatus, BatchStatusEntry, InvalidTransaction, LedgerEntry, SubmissionClient,
        SubmissionOutcome,
    };
}

pub use client::LedgerClient;
pub use errors::ClientError;
