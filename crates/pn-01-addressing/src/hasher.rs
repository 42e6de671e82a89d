//! Key hashing capability.
//!
//! The addresser never hashes directly; it asks a [`KeyHasher`]. Production
//! uses SHA-512, tests inject degenerate hashers to force address collisions.

use sha2::{Digest, Sha512};
use std::fmt::Debug;

/// Produces a lowercase hex digest for an address component.
pub trait KeyHasher: Send + Sync + Debug {
    /// Hex digest of `input`. Must be deterministic and lowercase.
    fn hex_digest(&self, input: &[u8]) -> String;
}

/// SHA-512 hasher used on every replica.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512Hasher;

impl KeyHasher for Sha512Hasher {
    fn hex_digest(&self, input: &[u8]) -> String {
        hex::encode(Sha512::digest(input))
    }
}

/// Hex SHA-512 of `input`.
pub fn sha512_hex(input: &[u8]) -> String {
    Sha512Hasher.hex_digest(input)
}
