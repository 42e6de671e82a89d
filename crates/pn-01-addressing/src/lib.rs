//! # pn-01-addressing
//!
//! Deterministic key → state address derivation for the PNRD-Net family.
//!
//! ## Address Layout
//!
//! ```text
//! ┌────────────┬────────────┬──────────────────────────────────────┐
//! │ namespace  │ type       │ truncated key digest                 │
//! │ 6 hex      │ 2 hex      │ 62 hex                               │
//! └────────────┴────────────┴──────────────────────────────────────┘
//!                        total: 70 hex characters
//! ```
//!
//! - `namespace` = first 6 hex chars of SHA-512(family name), derived once.
//! - `type` = `00` for owners, `01` for records.
//! - `digest` = first 62 hex chars of the injected key hash (SHA-512 by default).
//!
//! Two distinct keys may derive the same address. Every consumer stores a
//! *container* of entries at each address and must treat collisions as routine.

pub mod addresser;
pub mod family;
pub mod hasher;

pub use addresser::*;
pub use family::*;
pub use hasher::*;

/// Hex length of the family namespace prefix.
pub const NAMESPACE_LEN: usize = 6;

/// Hex length of the entity type prefix.
pub const TYPE_PREFIX_LEN: usize = 2;

/// Hex length of the truncated key digest.
pub const KEY_DIGEST_LEN: usize = 62;

/// Total hex length of every derived address.
pub const ADDRESS_LEN: usize = NAMESPACE_LEN + TYPE_PREFIX_LEN + KEY_DIGEST_LEN;
