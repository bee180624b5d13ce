//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{healthcheck, method_not_allowed, not_found, render_metrics, AppState};
use super::json::JsonWriter;

/// Create the API router.
///
/// Failed requests are logged by the error responders, so the trace layer
/// does not log 5xx responses a second time.
pub fn create_router<W: JsonWriter>(state: AppState<W>) -> Router {
    Router::new()
        .route(
            "/v1/healthcheck",
            get(healthcheck::<W>).fallback(method_not_allowed::<W>),
        )
        .route(
            "/metrics",
            get(render_metrics::<W>).fallback(method_not_allowed::<W>),
        )
        .fallback(not_found::<W>)
        .layer(TraceLayer::new_for_http().on_failure(()))
        .with_state(state)
}
