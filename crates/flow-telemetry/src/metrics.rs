//! Prometheus metrics for Flow Gateway subsystems.
//!
//! All metrics follow the naming convention: `fg_<subsystem>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Metrics registry for this process
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // SIGNING METRICS (fg-01)
    // =========================================================================

    /// Signatures produced by authorization capabilities
    pub static ref SIGNATURES_PRODUCED: Counter = Counter::new(
        "fg_signing_signatures_total",
        "Total number of transaction signatures produced"
    ).expect("metric creation failed");

    /// Signing failures by reason (invalid_key, invalid_message, curve)
    pub static ref SIGNING_FAILURES: CounterVec = CounterVec::new(
        Opts::new("fg_signing_failures_total", "Failed signer construction or signing calls"),
        &["reason"]
    ).expect("metric creation failed");

    // =========================================================================
    // RECEIPT METRICS (fg-02)
    // =========================================================================

    /// Receipts built, by outcome (successful, failed, executed, pending)
    pub static ref RECEIPTS_BUILT: CounterVec = CounterVec::new(
        Opts::new("fg_receipts_built_total", "Receipts reconstructed from status payloads"),
        &["outcome"]
    ).expect("metric creation failed");

    /// Event-derived receipt fields that could not be recovered
    pub static ref RECEIPT_FIELDS_UNAVAILABLE: CounterVec = CounterVec::new(
        Opts::new(
            "fg_receipt_fields_unavailable_total",
            "Receipt fields left unavailable after event extraction"
        ),
        &["field"]
    ).expect("metric creation failed");

    // =========================================================================
    // GATEWAY METRICS (fg-03)
    // =========================================================================

    /// Transactions submitted to the access node
    pub static ref TRANSACTIONS_SUBMITTED: Counter = Counter::new(
        "fg_gateway_transactions_submitted_total",
        "Total number of transactions submitted"
    ).expect("metric creation failed");

    /// Time spent waiting for a submitted transaction to seal
    pub static ref SEAL_WAIT_DURATION: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "fg_gateway_seal_wait_duration_seconds",
            "Time between submission and sealing"
        ).buckets(exponential_buckets(0.5, 2.0, 10).expect("valid buckets"))
    ).expect("metric creation failed");

    /// Gateway errors by operation
    pub static ref GATEWAY_ERRORS: CounterVec = CounterVec::new(
        Opts::new("fg_gateway_errors_total", "Gateway errors by operation"),
        &["operation"]
    ).expect("metric creation failed");
}

/// Handle to the registered metrics
pub struct MetricsHandle {
    registry: Arc<Registry>,
}

impl MetricsHandle {
    /// Render the registry in Prometheus text format.
    pub fn gather_text(&self) -> Result<String, TelemetryError> {
        encode_registry(&self.registry)
    }
}

/// Register all metrics with the registry.
///
/// Calling this more than once is harmless.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Signing
        Box::new(SIGNATURES_PRODUCED.clone()),
        Box::new(SIGNING_FAILURES.clone()),
        // Receipts
        Box::new(RECEIPTS_BUILT.clone()),
        Box::new(RECEIPT_FIELDS_UNAVAILABLE.clone()),
        // Gateway
        Box::new(TRANSACTIONS_SUBMITTED.clone()),
        Box::new(SEAL_WAIT_DURATION.clone()),
        Box::new(GATEWAY_ERRORS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    encode_registry(&REGISTRY)
}

fn encode_registry(registry: &Registry) -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Option<Histogram>,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: Some(histogram.clone()),
            start: std::time::Instant::now(),
        }
    }

    /// Stop without recording a sample.
    pub fn discard(mut self) {
        self.histogram = None;
    }

    /// Seconds elapsed since the timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        if let Some(histogram) = self.histogram.take() {
            histogram.observe(self.elapsed_secs());
        }
    }
}
