//! # PNRD-Net Test Suite
//!
//! Unified test crate for cross-crate flows: transactions are built and
//! signed with `pn-03-transaction-client`, then applied by
//! `pn-02-transaction-processor` against an in-memory state context.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Ledger harness, actors, reading builders
//! └── integration/
//!     ├── lifecycle.rs  # Alice/Bob provenance walk-through
//!     ├── collisions.rs # Forced address collisions
//!     ├── ordering.rs   # Order independence of owner registration
//!     ├── timestamps.rs # Future-skew tolerance per action
//!     └── atomicity.rs  # Rejections leave state untouched
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pn-tests
//! cargo test -p pn-tests integration::collisions
//! cargo bench -p pn-tests
//! ```

#![allow(dead_code)]

pub mod integration;
