//! Minimal JSON HTTP API.
//!
//! Every error leaves the service wrapped in a uniform envelope:
//!
//! ```text
//! { "error": "the requested resource could not be found" }
//! { "error": { "title": "must be provided" } }
//! ```
//!
//! Client errors (400, 404, 405, 409, 422) carry a message that is safe to
//! return. Server errors (500) are logged in full and reported with a fixed
//! message.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Envelopes, error responses, healthcheck and routing
//! - [`validator`]: Field-level validation feeding 422 responses
//! - [`metrics`]: Prometheus counters
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;
pub mod validator;

pub use api::AppState;
pub use config::{Config, Environment};
pub use error::{AppError, Result};

/// Build version reported by the healthcheck.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
