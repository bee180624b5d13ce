//! Error envelope responses.
//!
//! Every failure on the request path ends here. Client errors carry a message
//! that is safe to show; server errors are logged in full and reported to the
//! client with a fixed, opaque message.
//!
//! If the envelope itself cannot be written, the failure is logged once and a
//! bare `500` with an empty body is returned instead.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use super::envelope::{ErrorEnvelope, ErrorPayload, FieldErrors, HealthcheckResponse};
use super::handlers::{AppState, RequestContext};
use super::json::JsonWriter;
use crate::metrics;

/// Body of every 500 response.
pub const SERVER_ERROR_MESSAGE: &str =
    "the server encountered a problem and could not process your request";
/// Body of every 404 response.
pub const NOT_FOUND_MESSAGE: &str = "the requested resource could not be found";
/// Body of every 409 response.
pub const EDIT_CONFLICT_MESSAGE: &str =
    "unable to update the record due to an edit conflict, please try again";

impl<W: JsonWriter> AppState<W> {
    /// Wrap `payload` as `{"error": payload}` and write it with `status`.
    pub fn error_response(
        &self,
        req: &RequestContext,
        status: StatusCode,
        payload: impl Into<ErrorPayload>,
    ) -> Response {
        self.write_envelope(req, status, &payload.into(), None)
    }

    /// 500. Logs `err`; the client only sees [`SERVER_ERROR_MESSAGE`].
    pub fn server_error(&self, req: &RequestContext, err: impl fmt::Display) -> Response {
        let payload = ErrorPayload::from(SERVER_ERROR_MESSAGE);
        self.write_envelope(req, StatusCode::INTERNAL_SERVER_ERROR, &payload, Some(&err))
    }

    /// 404.
    pub fn not_found(&self, req: &RequestContext) -> Response {
        self.error_response(req, StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    /// 405, naming the offending method.
    pub fn method_not_allowed(&self, req: &RequestContext) -> Response {
        let message = format!(
            "the {} method is not supported for this resource",
            req.method
        );
        self.error_response(req, StatusCode::METHOD_NOT_ALLOWED, message)
    }

    /// 400. Echoes `err`'s message text to the client.
    pub fn bad_request(&self, req: &RequestContext, err: impl fmt::Display) -> Response {
        self.error_response(req, StatusCode::BAD_REQUEST, err.to_string())
    }

    /// 422 with one message per invalid field.
    pub fn failed_validation(&self, req: &RequestContext, errors: FieldErrors) -> Response {
        self.error_response(req, StatusCode::UNPROCESSABLE_ENTITY, errors)
    }

    /// 409.
    pub fn edit_conflict(&self, req: &RequestContext) -> Response {
        self.error_response(req, StatusCode::CONFLICT, EDIT_CONFLICT_MESSAGE)
    }

    /// 200 with status and system info. Write failures become a 500.
    pub fn healthcheck_response(&self, req: &RequestContext) -> Response {
        let body = HealthcheckResponse {
            status: "available",
            system_info: &self.system_info,
        };

        match self.writer.write_json(StatusCode::OK, &body, None) {
            Ok(response) => response,
            Err(e) => self.server_error(req, e),
        }
    }

    // `cause` is logged in the same event as any write failure so a request
    // never produces more than one log entry.
    fn write_envelope(
        &self,
        req: &RequestContext,
        status: StatusCode,
        payload: &ErrorPayload,
        cause: Option<&dyn fmt::Display>,
    ) -> Response {
        match self
            .writer
            .write_json(status, &ErrorEnvelope::new(payload), None)
        {
            Ok(response) => {
                if let Some(cause) = cause {
                    error!(
                        method = %req.method,
                        uri = %req.uri,
                        error = %cause,
                        "request failed"
                    );
                }
                metrics::inc_error_responses(status);
                response
            }
            Err(write_err) => {
                metrics::inc_write_failures();
                metrics::inc_error_responses(StatusCode::INTERNAL_SERVER_ERROR);
                match cause {
                    Some(cause) => error!(
                        method = %req.method,
                        uri = %req.uri,
                        status = status.as_u16(),
                        error = %write_err,
                        cause = %cause,
                        "failed to write error response"
                    ),
                    None => error!(
                        method = %req.method,
                        uri = %req.uri,
                        status = status.as_u16(),
                        error = %write_err,
                        "failed to write error response"
                    ),
                }
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
