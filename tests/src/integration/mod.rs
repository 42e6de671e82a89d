//! Cross-crate integration flows.

pub mod atomicity;
pub mod collisions;
pub mod lifecycle;
pub mod ordering;
pub mod timestamps;
