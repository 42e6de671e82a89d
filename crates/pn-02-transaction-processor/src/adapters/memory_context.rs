//! # In-Memory State Context
//!
//! `StateContext` over a hash map, for tests and local replays.
//! Production contexts are provided by the host ledger.

use crate::errors::ContextError;
use crate::ports::outbound::{StateContext, StateEntry};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory state store with injectable latency and outages.
#[derive(Debug, Default)]
pub struct InMemoryContext {
    state: RwLock<HashMap<String, Vec<u8>>>,
    latency: Option<Duration>,
    unavailable: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every call by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `set_state` calls that succeeded.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw bytes at `address`.
    pub fn raw(&self, address: &str) -> Option<Vec<u8>> {
        self.state.read().get(address).cloned()
    }

    /// Seed raw bytes without counting a write.
    pub fn insert_raw(&self, address: impl Into<String>, data: Vec<u8>) {
        self.state.write().insert(address.into(), data);
    }

    /// Ordered copy of the whole store.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.state
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    async fn simulate(&self) -> Result<(), ContextError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ContextError::Unreachable("in-memory context offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl StateContext for InMemoryContext {
    async fn get_state(&self, addresses: &[String]) -> Result<Vec<StateEntry>, ContextError> {
        self.simulate().await?;
        let state = self.state.read();
        Ok(addresses
            .iter()
            .filter_map(|address| {
                state
                    .get(address)
                    .map(|data| StateEntry::new(address.clone(), data.clone()))
            })
            .collect())
    }

    async fn set_state(&self, entries: Vec<StateEntry>) -> Result<Vec<String>, ContextError> {
        self.simulate().await?;
        let mut state = self.state.write();
        let mut set = Vec::with_capacity(entries.len());
        for entry in entries {
            set.push(entry.address.clone());
            state.insert(entry.address, entry.data);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(set)
    }
}
