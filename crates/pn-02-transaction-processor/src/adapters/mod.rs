//! # Adapters Layer (Outer Hexagon)
//!
//! - `state`: container-aware typed access over any `StateContext`
//! - `memory_context`: in-memory `StateContext` for tests and replays

pub mod memory_context;
pub mod state;

pub use memory_context::InMemoryContext;
pub use state::{EventInput, PnrdState};
