//! JSON response writer.

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::Response;
use serde::Serialize;

use crate::error::WriteError;

/// Serializes a payload and produces the HTTP response carrying it.
pub trait JsonWriter: Clone + Send + Sync + 'static {
    /// Write `data` with `status`, copying any extra `headers` onto the response.
    fn write_json<T: Serialize + ?Sized>(
        &self,
        status: StatusCode,
        data: &T,
        headers: Option<&HeaderMap>,
    ) -> Result<Response, WriteError>;
}

/// Pretty-printed JSON followed by a trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson;

impl JsonWriter for PrettyJson {
    fn write_json<T: Serialize + ?Sized>(
        &self,
        status: StatusCode,
        data: &T,
        headers: Option<&HeaderMap>,
    ) -> Result<Response, WriteError> {
        let mut body = serde_json::to_vec_pretty(data)?;
        body.push(b'\n');

        let mut response = axum::http::Response::builder()
            .status(status)
            .body(Body::from(body))?;

        let response_headers = response.headers_mut();
        if let Some(extra) = headers {
            for (name, value) in extra {
                response_headers.insert(name.clone(), value.clone());
            }
        }
        response_headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Ok(response)
    }
}
