//! # PNRD Telemetry
//!
//! Structured logging for PNRD-Net services.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pn_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::for_component("transaction-processor");
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PNRD_SERVICE_NAME` | `pnrdnet` | Service name in logs |
//! | `PNRD_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `PNRD_JSON_LOGS` | `false` (`true` in containers) | JSON output |
//! | `PNRD_CONSOLE_OUTPUT` | `true` | Console output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Global subscriber already initialized: {0}")]
    AlreadyInitialized(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
