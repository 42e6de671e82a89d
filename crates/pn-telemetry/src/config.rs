//! Logging configuration from environment variables.

use std::env;

/// Configuration for structured logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log filter directive (trace, debug, info, warn, error, or any `EnvFilter` directive)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to write logs to the console at all
    pub console_output: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "pnrdnet".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            console_output: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PNRD_SERVICE_NAME`: Service name (default: pnrdnet)
    /// - `PNRD_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `PNRD_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    /// - `PNRD_CONSOLE_OUTPUT`: Enable console output (default: true)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("PNRD_SERVICE_NAME").unwrap_or_else(|_| "pnrdnet".to_string()),

            log_level: env::var("PNRD_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("PNRD_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),

            console_output: env::var("PNRD_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    /// Configuration for one named component, e.g. `transaction-processor`.
    pub fn for_component(component: &str) -> Self {
        let mut config = Self::from_env();
        config.service_name = format!("{}-{}", config.service_name, component);
        config
    }
}
