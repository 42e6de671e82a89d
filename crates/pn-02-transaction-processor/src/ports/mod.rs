//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Port (Inbound)**: `TransactionHandler`, the host registration
//!   contract.
//! - **Driven Ports (Outbound)**: `StateContext` (the host's per-transaction
//!   state store) and `TimeSource`.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
