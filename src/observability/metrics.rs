//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_requests_total` (counter): requests by method, status
//! - `router_request_duration_seconds` (histogram): end-to-end latency
//! - `router_not_found_total` (counter): requests with no matching route
//! - `router_handler_duration_seconds` (histogram): handler time by route
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade (no-op until a recorder exists)
//! - Prometheus exporter is optional and owns its own listener

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let status = status.to_string();
    ::metrics::counter!(
        "router_requests_total",
        "method" => method.clone(),
        "status" => status.clone()
    )
    .increment(1);
    ::metrics::histogram!(
        "router_request_duration_seconds",
        "method" => method,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a request that matched no route.
pub fn record_not_found(method: &str) {
    ::metrics::counter!("router_not_found_total", "method" => method.to_string()).increment(1);
}

/// Record time spent inside a handler.
pub fn record_handler(route: &str, start: Instant) {
    ::metrics::histogram!("router_handler_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}
