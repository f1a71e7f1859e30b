//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - HTTP request counts by method, path, and status
//! - HTTP request latency histograms
//! - Sequence numbers allocated, by scope
//! - Sequence numbers consumed by requests that failed afterwards (gaps)
//! - Jobs enqueued, by queue
//! - Store command failures, by operation

use once_cell::sync::Lazy;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

const NAMESPACE: &str = "chat_ingest";

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// HTTP request counter - tracks total requests by method, path, and status code
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests").namespace(NAMESPACE),
        &["method", "path", "status"],
    )
    .expect("Failed to create HTTP_REQUESTS_TOTAL metric")
});

/// HTTP request latency histogram - tracks request duration in seconds
pub static HTTP_REQUEST_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    let buckets = vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];
    HistogramVec::new(
        HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        )
        .namespace(NAMESPACE)
        .buckets(buckets),
        &["method", "path"],
    )
    .expect("Failed to create HTTP_REQUEST_DURATION_SECONDS metric")
});

/// Sequence numbers handed out
pub static SEQUENCE_ALLOCATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("sequence_allocations_total", "Sequence numbers allocated").namespace(NAMESPACE),
        &["scope"], // "chat", "message"
    )
    .expect("Failed to create SEQUENCE_ALLOCATIONS_TOTAL metric")
});

/// Sequence numbers consumed without a job reaching the queue
pub static SEQUENCE_GAPS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "sequence_gaps_total",
            "Sequence numbers consumed by requests that failed after allocation",
        )
        .namespace(NAMESPACE),
        &["scope"],
    )
    .expect("Failed to create SEQUENCE_GAPS_TOTAL metric")
});

/// Jobs appended to worker queues
pub static JOBS_ENQUEUED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("jobs_enqueued_total", "Jobs appended to worker queues").namespace(NAMESPACE),
        &["queue"],
    )
    .expect("Failed to create JOBS_ENQUEUED_TOTAL metric")
});

/// Failed store commands
pub static STORE_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("store_errors_total", "Store commands that failed or timed out")
            .namespace(NAMESPACE),
        &["operation"],
    )
    .expect("Failed to create STORE_ERRORS_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .expect("Failed to register HTTP_REQUESTS_TOTAL");
    registry
        .register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()))
        .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");
    registry
        .register(Box::new(SEQUENCE_ALLOCATIONS_TOTAL.clone()))
        .expect("Failed to register SEQUENCE_ALLOCATIONS_TOTAL");
    registry
        .register(Box::new(SEQUENCE_GAPS_TOTAL.clone()))
        .expect("Failed to register SEQUENCE_GAPS_TOTAL");
    registry
        .register(Box::new(JOBS_ENQUEUED_TOTAL.clone()))
        .expect("Failed to register JOBS_ENQUEUED_TOTAL");
    registry
        .register(Box::new(STORE_ERRORS_TOTAL.clone()))
        .expect("Failed to register STORE_ERRORS_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Helper to record HTTP request metrics
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let status = status.to_string();
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, status.as_str()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration_secs);
}

pub fn record_allocation(scope: &str) {
    SEQUENCE_ALLOCATIONS_TOTAL.with_label_values(&[scope]).inc();
}

pub fn record_sequence_gap(scope: &str) {
    SEQUENCE_GAPS_TOTAL.with_label_values(&[scope]).inc();
}

pub fn record_job_enqueued(queue: &str) {
    JOBS_ENQUEUED_TOTAL.with_label_values(&[queue]).inc();
}

pub fn record_store_error(operation: &str) {
    STORE_ERRORS_TOTAL.with_label_values(&[operation]).inc();
}
