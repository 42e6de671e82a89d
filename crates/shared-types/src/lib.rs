//! # Shared Types Crate
//!
//! Wire schema and stored entities for the PNRD-Net provenance ledger.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the processor and the client encode and decode
//!   through the same types and the same [`codec`] settings.
//! - **Deterministic Bytes**: fixed-int bincode, no maps, insertion order kept.
//!   Every replica must produce bit-identical state for the same input.
//! - **Collision-Tolerant Storage**: state is stored as [`Container`]s of
//!   entries, never as a bare entity.

pub mod codec;
pub mod container;
pub mod entities;
pub mod errors;
pub mod payload;
pub mod transaction;

pub use container::*;
pub use entities::*;
pub use errors::*;
pub use payload::*;
pub use transaction::*;
