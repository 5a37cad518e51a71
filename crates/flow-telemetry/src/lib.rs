//! # Flow Telemetry
//!
//! Logging and metrics for Flow Gateway.
//!
//! ## Components
//!
//! - **Logging**: `tracing` subscriber with `EnvFilter`, pretty or JSON output
//! - **Metrics**: Prometheus counters and histograms per subsystem
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flow_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_telemetry(config).expect("Failed to init telemetry");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FG_SERVICE_NAME` | `flow-gateway` | Service name in logs |
//! | `FG_LOG_LEVEL` | `info` | Log level filter |
//! | `FG_JSON_LOGS` | `false` | JSON log lines |
//! | `FG_NETWORK` | `testnet` | Network label |

mod config;
pub mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_metrics, register_metrics, HistogramTimer, MetricsHandle, GATEWAY_ERRORS,
    RECEIPTS_BUILT, RECEIPT_FIELDS_UNAVAILABLE, SEAL_WAIT_DURATION, SIGNATURES_PRODUCED,
    SIGNING_FAILURES, TRANSACTIONS_SUBMITTED,
};
pub use tracing_setup::{init_test_tracing, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let metrics = register_metrics()?;
    init_tracing(&config)?;

    Ok(TelemetryGuard { metrics })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    metrics: MetricsHandle,
}

impl TelemetryGuard {
    /// Metrics handle for exposition.
    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
