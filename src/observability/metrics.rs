//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): HTTP requests by method, path, status
//! - `gateway_request_duration_seconds` (histogram): HTTP latency
//! - `gateway_contract_calls_total` (counter): contract calls by method, outcome
//! - `gateway_contract_call_duration_seconds` (histogram): contract call latency
//! - `gateway_rpc_healthy` (gauge): 1 = node reachable, 0 = unreachable

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter and register metric descriptions.
///
/// Must run inside a Tokio runtime; the exporter serves scrapes on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }

    describe_counter!(
        "gateway_requests_total",
        "Total HTTP requests by method, path and status"
    );
    describe_histogram!(
        "gateway_request_duration_seconds",
        "HTTP request latency in seconds"
    );
    describe_counter!(
        "gateway_contract_calls_total",
        "Total contract calls by method and outcome"
    );
    describe_histogram!(
        "gateway_contract_call_duration_seconds",
        "Contract call latency in seconds"
    );
    describe_gauge!("gateway_rpc_healthy", "Blockchain RPC reachability");
}

/// Record one handled HTTP request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    histogram!(
        "gateway_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string(),
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one contract call (read or mutation).
pub fn record_contract_call(method: &'static str, success: bool, start: Instant) {
    let outcome = if success { "ok" } else { "error" };
    counter!(
        "gateway_contract_calls_total",
        "method" => method,
        "outcome" => outcome,
    )
    .increment(1);
    histogram!(
        "gateway_contract_call_duration_seconds",
        "method" => method,
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record blockchain RPC health.
pub fn record_rpc_health(healthy: bool) {
    gauge!("gateway_rpc_healthy").set(if healthy { 1.0 } else { 0.0 });
}
