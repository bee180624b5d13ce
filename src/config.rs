//! Application configuration loaded from environment variables.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing_subscriber::EnvFilter;

use crate::error::AppError;
use crate::validator::Validator;

/// Deployment environment the service is running in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    /// Local development.
    #[default]
    Development,
    /// Pre-production.
    Staging,
    /// Production.
    Production,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment reported by the healthcheck.
    #[serde(default)]
    pub environment: Environment,

    // === Logging ===
    /// Log filter: a bare level or full `EnvFilter` directives.
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_port() -> u16 {
    4000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            environment: Environment::default(),
            rust_log: default_log_level(),
            log_json: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut v = Validator::new();
        v.check(self.port != 0, "port", "must be greater than zero");
        v.check(
            EnvFilter::try_new(&self.rust_log).is_ok(),
            "rust_log",
            "must be a valid log filter directive",
        );

        if v.valid() {
            return Ok(());
        }

        let reason = v
            .into_errors()
            .into_iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        Err(AppError::InvalidConfig(reason))
    }
}
