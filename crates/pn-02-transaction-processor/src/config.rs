//! # Processor Configuration
//!
//! Immutable settings injected at handler construction. No global state.

use pn_01_addressing::FamilyConfig;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Default future-skew tolerance for transaction timestamps (5 minutes).
pub const DEFAULT_SYNC_TOLERANCE_SECS: u64 = 60 * 5;

/// Default bound on each state store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(2);

/// Transaction processor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Family identity (name, version) the handler registers under.
    pub family: FamilyConfig,
    /// Maximum seconds a transaction timestamp may lead local time.
    pub sync_tolerance_secs: u64,
    /// Bound on each state `get`/`set` call.
    pub store_timeout: Duration,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            family: FamilyConfig::default(),
            sync_tolerance_secs: DEFAULT_SYNC_TOLERANCE_SECS,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

impl ProcessorConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PNRD_SYNC_TOLERANCE_SECS`: timestamp tolerance (default: 300)
    /// - `PNRD_STORE_TIMEOUT_MS`: store call bound (default: 2000)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            family: defaults.family,
            sync_tolerance_secs: env::var("PNRD_SYNC_TOLERANCE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sync_tolerance_secs),
            store_timeout: env::var("PNRD_STORE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.store_timeout),
        }
    }

    /// Reject settings no replica could run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.family.name.is_empty() {
            return Err(ConfigError::EmptyFamilyName);
        }
        if self.family.version.is_empty() {
            return Err(ConfigError::EmptyFamilyVersion);
        }
        if self.store_timeout.is_zero() {
            return Err(ConfigError::ZeroStoreTimeout);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("family name must not be empty")]
    EmptyFamilyName,

    #[error("family version must not be empty")]
    EmptyFamilyVersion,

    #[error("store timeout must be greater than zero")]
    ZeroStoreTimeout,
}
