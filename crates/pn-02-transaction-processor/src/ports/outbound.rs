//! # Outbound Ports
//!
//! Dependencies the handler needs from its host.

use crate::errors::ContextError;
use async_trait::async_trait;
use shared_types::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};

/// Bytes stored at one address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateEntry {
    pub address: String,
    pub data: Vec<u8>,
}

impl StateEntry {
    pub fn new(address: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            address: address.into(),
            data,
        }
    }
}

/// Per-transaction view of the host's global state.
///
/// Writes are buffered by the host and committed only if `apply` succeeds.
#[async_trait]
pub trait StateContext: Send + Sync {
    /// Read the given addresses. Absent addresses are omitted from the result.
    async fn get_state(&self, addresses: &[String]) -> Result<Vec<StateEntry>, ContextError>;

    /// Write entries, returning the addresses that were set.
    async fn set_state(&self, entries: Vec<StateEntry>) -> Result<Vec<String>, ContextError>;
}

/// Time source abstraction for testability.
pub trait TimeSource: Send + Sync {
    /// Current Unix time in seconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Settable clock for deterministic tests and replays.
#[derive(Debug, Default)]
pub struct FixedTimeSource {
    time: AtomicU64,
}

impl FixedTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.time.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set(&self, time: Timestamp) {
        self.time.store(time, Ordering::SeqCst);
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(Ordering::SeqCst)
    }
}
