//! Prometheus metrics for error responses.

use axum::http::StatusCode;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::AppError;

// === Metric Name Constants ===

/// Error envelopes produced, labelled by status.
pub const METRIC_ERROR_RESPONSES: &str = "http_error_responses_total";
/// Responses whose body could not be written.
pub const METRIC_RESPONSE_WRITE_FAILURES: &str = "http_response_write_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_ERROR_RESPONSES,
        "Total number of error envelopes returned to clients"
    );
    describe_counter!(
        METRIC_RESPONSE_WRITE_FAILURES,
        "Total number of responses that failed to serialize"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder and return its render handle.
pub fn install_recorder() -> Result<PrometheusHandle, AppError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::Metrics(e.to_string()))
}

/// Increment the error response counter for `status`.
pub fn inc_error_responses(status: StatusCode) {
    counter!(METRIC_ERROR_RESPONSES, "status" => status.as_u16().to_string()).increment(1);
}

/// Increment the write failure counter.
pub fn inc_write_failures() {
    counter!(METRIC_RESPONSE_WRITE_FAILURES).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_rendered_by_local_recorder() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            inc_error_responses(StatusCode::NOT_FOUND);
            inc_write_failures();
        });

        let rendered = handle.render();
        assert!(rendered.contains(METRIC_ERROR_RESPONSES));
        assert!(rendered.contains("status=\"404\""));
        assert!(rendered.contains(METRIC_RESPONSE_WRITE_FAILURES));
    }
}
