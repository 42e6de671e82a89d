//! # Address Containers
//!
//! Every state address holds a container: an ordered list of entries whose
//! natural keys derive that address, by design or by hash collision.
//!
//! Writers must round-trip the whole container. Replacing a bucket with only
//! the touched entry would silently erase colliding entries.

use crate::codec;
use crate::entities::{Owner, Record};
use crate::errors::CodecError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Entry type that can live in a container.
pub trait Keyed {
    /// Natural key used to locate the entry within its container.
    fn natural_key(&self) -> &str;
}

impl Keyed for Owner {
    fn natural_key(&self) -> &str {
        &self.public_key
    }
}

impl Keyed for Record {
    fn natural_key(&self) -> &str {
        &self.record_id
    }
}

/// Ordered collection of entries stored at one address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container<E> {
    /// Entries in append order.
    pub entries: Vec<E>,
}

/// Owner container format.
pub type OwnerContainer = Container<Owner>;

/// Record container format.
pub type RecordContainer = Container<Record>;

impl<E> Default for Container<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E> Container<E> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: E) {
        self.entries.push(entry);
    }
}

impl<E: Keyed> Container<E> {
    /// Entry whose natural key equals `key`.
    pub fn find(&self, key: &str) -> Option<&E> {
        self.entries.iter().find(|entry| entry.natural_key() == key)
    }

    /// Mutable entry whose natural key equals `key`.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut E> {
        self.entries
            .iter_mut()
            .find(|entry| entry.natural_key() == key)
    }
}

impl<E: Serialize + DeserializeOwned> Container<E> {
    /// Decode container bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::decode(bytes)
    }

    /// Encode the full container.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(self)
    }
}

// =============================================================================
// TESTS
// =============================================================================
