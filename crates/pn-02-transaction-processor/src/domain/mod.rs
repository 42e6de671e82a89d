//! # Domain Layer (Inner Hexagon)
//!
//! Pure decoding and validation rules. No I/O, no clocks, no store access.

pub mod entry;
pub mod payload;
pub mod rules;

pub use entry::ContainerEntry;
pub use payload::{DecodedPayload, TransactionAction};
pub use rules::*;
