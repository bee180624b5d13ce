//! HTTP API module: error envelopes, healthcheck and metrics endpoints.

pub mod envelope;
pub mod handlers;
pub mod json;
pub mod responses;
pub mod routes;

#[cfg(test)]
mod test_support;

pub use envelope::{ErrorPayload, FieldErrors, SystemInfo};
pub use handlers::{AppState, RequestContext};
pub use json::{JsonWriter, PrettyJson};
pub use routes::create_router;
