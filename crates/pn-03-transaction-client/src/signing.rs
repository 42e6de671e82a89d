//! # Transaction Signing (secp256k1)
//!
//! RFC 6979 deterministic ECDSA over SHA-256. Public keys are compressed SEC1
//! hex; signatures are 64-byte `r||s` hex.

use crate::errors::ClientError;
use k256::ecdsa::{signature::Signer as _, Signature, SigningKey};

/// Signing capability used by the builder.
pub trait Signer: Send + Sync {
    /// Hex public key that identifies this signer on the ledger.
    fn public_key_hex(&self) -> String;

    /// Hex signature over `message`.
    fn sign_hex(&self, message: &[u8]) -> String;
}

/// secp256k1 signer.
pub struct Secp256k1Signer {
    signing_key: SigningKey,
}

impl Secp256k1Signer {
    /// Generate a random key.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Load from a 32-byte private key in hex.
    pub fn from_private_key_hex(private_key: &str) -> Result<Self, ClientError> {
        let bytes =
            hex::decode(private_key).map_err(|e| ClientError::InvalidPrivateKey(e.to_string()))?;
        let signing_key = SigningKey::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { signing_key })
    }

    /// Private key as hex.
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }
}

impl Signer for Secp256k1Signer {
    fn public_key_hex(&self) -> String {
        hex::encode(self.signing_key.verifying_key().to_sec1_bytes())
    }

    fn sign_hex(&self, message: &[u8]) -> String {
        let sig: Signature = self.signing_key.sign(message);
        hex::encode(sig.to_bytes())
    }
}

impl std::fmt::Debug for Secp256k1Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1Signer")
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}

/// Fresh key pair as `(public_key_hex, private_key_hex)`.
pub fn new_key_pair() -> (String, String) {
    let signer = Secp256k1Signer::generate();
    (signer.public_key_hex(), signer.private_key_hex())
}
