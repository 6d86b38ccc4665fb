//! Metrics collection and exposition.
//!
//! # Metrics
//! - `wordtype_requests_total` (counter): total requests by method, status
//! - `wordtype_request_duration_seconds` (histogram): latency by method
//!
//! # Design Decisions
//! - Prometheus exporter runs on its own listener, gated by config
//! - Recording is cheap enough to sit on the request path

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr`.
///
/// Failure to install is logged and otherwise ignored: the service keeps
/// serving requests without a metrics endpoint.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, start_time: Instant) {
    metrics::counter!(
        "wordtype_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "wordtype_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(start_time.elapsed().as_secs_f64());
}
