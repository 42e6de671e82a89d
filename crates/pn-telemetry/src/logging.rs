//! Subscriber setup: `EnvFilter` plus a pretty or JSON `fmt` layer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Build the filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Config(format!("invalid log filter: {e}")))
}

/// Install the global subscriber.
///
/// Fails with [`TelemetryError::AlreadyInitialized`] if a global subscriber
/// is already set.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    let result = match (config.console_output, config.json_logs) {
        (false, _) => tracing_subscriber::registry().with(filter).try_init(),
        (true, true) => {
            // JSON output for containers/production
            let json_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
        }
        (true, false) => {
            // Pretty output for development
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
        }
    };
    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        "logging initialized"
    );
    Ok(())
}
