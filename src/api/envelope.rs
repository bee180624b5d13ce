//! Response envelopes.
//!
//! Every error body has the shape `{"error": <payload>}` where the payload is
//! either a plain message or a field → message object.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Environment;

/// Validation errors keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Payload carried under the `error` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    /// A single human-readable message.
    Message(String),
    /// One message per offending field.
    FieldErrors(FieldErrors),
}

impl From<String> for ErrorPayload {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for ErrorPayload {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<FieldErrors> for ErrorPayload {
    fn from(errors: FieldErrors) -> Self {
        Self::FieldErrors(errors)
    }
}

/// The `{"error": ...}` wrapper.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    /// Wrapped payload.
    pub error: &'a ErrorPayload,
}

impl<'a> ErrorEnvelope<'a> {
    /// Wrap `payload`.
    pub fn new(payload: &'a ErrorPayload) -> Self {
        Self { error: payload }
    }
}

/// Build details reported by the healthcheck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    /// Deployment environment.
    pub environment: Environment,
    /// Build version string.
    pub version: String,
}

/// Healthcheck response.
#[derive(Debug, Serialize)]
pub struct HealthcheckResponse<'a> {
    /// Always "available" while the process is serving.
    pub status: &'static str,
    /// Environment and version.
    pub system_info: &'a SystemInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn message_payload_serializes_as_bare_string() {
        let payload = ErrorPayload::from("the requested resource could not be found");
        let value = serde_json::to_value(ErrorEnvelope::new(&payload)).unwrap();
        assert_eq!(
            value,
            json!({ "error": "the requested resource could not be found" })
        );
    }

    #[test]
    fn field_errors_serialize_as_bare_object() {
        let mut errors = FieldErrors::new();
        errors.insert("title".to_string(), "must be provided".to_string());
        errors.insert("year".to_string(), "must be greater than 1888".to_string());

        let payload = ErrorPayload::from(errors);
        let value = serde_json::to_value(ErrorEnvelope::new(&payload)).unwrap();
        assert_eq!(
            value,
            json!({
                "error": {
                    "title": "must be provided",
                    "year": "must be greater than 1888"
                }
            })
        );
    }

    #[test]
    fn healthcheck_nests_system_info() {
        let info = SystemInfo {
            environment: Environment::Production,
            version: "0.1.0".to_string(),
        };
        let value = serde_json::to_value(HealthcheckResponse {
            status: "available",
            system_info: &info,
        })
        .unwrap();
        assert_eq!(
            value,
            json!({
                "status": "available",
                "system_info": { "environment": "production", "version": "0.1.0" }
            })
        );
    }
}
