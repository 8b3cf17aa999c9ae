//! Prometheus metrics endpoint
//!
//! Exposes gateway metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<Option<PrometheusHandle>> = Lazy::new(|| {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            None
        }
    }
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "gateway_upstream_requests_total",
        "Total number of calls made to backend services"
    );
    metrics::describe_histogram!(
        "gateway_upstream_request_duration_seconds",
        "Backend call duration in seconds"
    );
    metrics::describe_counter!(
        "gateway_auth_total",
        "Bearer token authentication outcomes"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

/// Record one backend call
pub fn record_upstream_call(service: &str, operation: &str, status: &str, duration_secs: f64) {
    metrics::counter!(
        "gateway_upstream_requests_total",
        "service" => service.to_string(),
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "gateway_upstream_request_duration_seconds",
        "service" => service.to_string(),
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}

/// Record an authentication outcome
pub fn record_auth(outcome: &str) {
    metrics::counter!("gateway_auth_total", "outcome" => outcome.to_string()).increment(1);
}
