//! HTTP API handlers.

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{request::Parts, Method, Uri},
    response::{IntoResponse, Response},
};
use metrics_exporter_prometheus::PrometheusHandle;

use super::envelope::SystemInfo;
use super::json::{JsonWriter, PrettyJson};
use crate::config::Config;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState<W = PrettyJson> {
    /// Environment and version reported by the healthcheck.
    pub system_info: Arc<SystemInfo>,
    /// Serializes response bodies.
    pub writer: W,
    /// Prometheus render handle, when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl<W: fmt::Debug> fmt::Debug for AppState<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("system_info", &self.system_info)
            .field("writer", &self.writer)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl AppState {
    /// Create app state from loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_writer(
            SystemInfo {
                environment: config.environment,
                version: crate::VERSION.to_string(),
            },
            PrettyJson,
        )
    }
}

impl<W: JsonWriter> AppState<W> {
    /// Create app state with an explicit writer.
    pub fn with_writer(system_info: SystemInfo, writer: W) -> Self {
        Self {
            system_info: Arc::new(system_info),
            writer,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle served at `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Method and URI of the request being answered.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// HTTP method.
    pub method: Method,
    /// Request URI.
    pub uri: Uri,
}

impl RequestContext {
    /// Build a context from its parts.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self { method, uri }
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::new(parts.method.clone(), parts.uri.clone()))
    }
}

/// Healthcheck handler - reports availability, environment and version.
pub async fn healthcheck<W: JsonWriter>(
    State(state): State<AppState<W>>,
    req: RequestContext,
) -> Response {
    state.healthcheck_response(&req)
}

/// Fallback for unknown routes.
pub async fn not_found<W: JsonWriter>(
    State(state): State<AppState<W>>,
    req: RequestContext,
) -> Response {
    state.not_found(&req)
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed<W: JsonWriter>(
    State(state): State<AppState<W>>,
    req: RequestContext,
) -> Response {
    state.method_not_allowed(&req)
}

/// Prometheus exposition, or 404 when no recorder is installed.
pub async fn render_metrics<W: JsonWriter>(
    State(state): State<AppState<W>>,
    req: RequestContext,
) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => state.not_found(&req),
    }
}
