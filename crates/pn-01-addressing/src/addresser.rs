//! # Addresser
//!
//! Pure mapping from a natural key to a fixed-length state address.

use crate::family::FamilyConfig;
use crate::hasher::{sha512_hex, KeyHasher, Sha512Hasher};
use crate::{ADDRESS_LEN, KEY_DIGEST_LEN, NAMESPACE_LEN, TYPE_PREFIX_LEN};
use std::fmt;
use std::sync::Arc;

/// Entity kinds stored under this family's namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Owner identities, keyed by public key.
    Owner,
    /// Provenance records, keyed by record id.
    Record,
}

impl AddressKind {
    /// Two-character type prefix following the namespace.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Owner => "00",
            Self::Record => "01",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owner => write!(f, "owner"),
            Self::Record => write!(f, "record"),
        }
    }
}

/// Classification of an arbitrary address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressSpace {
    /// Owner container in this namespace.
    Owner,
    /// Record container in this namespace.
    Record,
    /// Anything else (foreign namespace, unknown prefix, wrong length).
    Other,
}

/// Derives addresses for one family.
///
/// Immutable after construction; cheap to clone and safe to share across
/// concurrently processed transactions.
#[derive(Clone)]
pub struct Addresser {
    family: FamilyConfig,
    namespace: String,
    hasher: Arc<dyn KeyHasher>,
}

impl Addresser {
    /// Addresser using SHA-512 key digests.
    pub fn new(family: FamilyConfig) -> Self {
        Self::with_hasher(family, Arc::new(Sha512Hasher))
    }

    /// Addresser with an injected key hasher.
    ///
    /// The namespace is always SHA-512 of the family name, so replacing the
    /// key hasher never moves the family out of its namespace.
    pub fn with_hasher(family: FamilyConfig, hasher: Arc<dyn KeyHasher>) -> Self {
        let namespace = sha512_hex(family.name.as_bytes())[..NAMESPACE_LEN].to_string();
        Self {
            family,
            namespace,
            hasher,
        }
    }

    /// Family this addresser derives for.
    pub fn family(&self) -> &FamilyConfig {
        &self.family
    }

    /// Six hex character namespace prefix.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Derive the address of `key` for the given entity kind.
    pub fn address(&self, kind: AddressKind, key: &str) -> String {
        let digest = self.hasher.hex_digest(key.as_bytes());
        let mut address = String::with_capacity(ADDRESS_LEN);
        address.push_str(&self.namespace);
        address.push_str(kind.prefix());
        address.extend(digest.chars().take(KEY_DIGEST_LEN));
        // Short digests from injected hashers are padded, never truncating the layout.
        while address.len() < ADDRESS_LEN {
            address.push('0');
        }
        address
    }

    /// Address of the owner container holding `public_key`.
    pub fn owner_address(&self, public_key: &str) -> String {
        self.address(AddressKind::Owner, public_key)
    }

    /// Address of the record container holding `record_id`.
    pub fn record_address(&self, record_id: &str) -> String {
        self.address(AddressKind::Record, record_id)
    }

    /// Check that `address` is a well-formed address in this namespace.
    pub fn is_valid_address(&self, address: &str) -> bool {
        address.len() == ADDRESS_LEN
            && address.starts_with(&self.namespace)
            && address
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    /// Classify an address by namespace and type prefix.
    pub fn address_type(&self, address: &str) -> AddressSpace {
        if !self.is_valid_address(address) {
            return AddressSpace::Other;
        }
        let prefix = &address[NAMESPACE_LEN..NAMESPACE_LEN + TYPE_PREFIX_LEN];
        if prefix == AddressKind::Owner.prefix() {
            AddressSpace::Owner
        } else if prefix == AddressKind::Record.prefix() {
            AddressSpace::Record
        } else {
            AddressSpace::Other
        }
    }
}

impl Default for Addresser {
    fn default() -> Self {
        Self::new(FamilyConfig::default())
    }
}

impl fmt::Debug for Addresser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Addresser")
            .field("family", &self.family)
            .field("namespace", &self.namespace)
            .field("hasher", &self.hasher)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
