//! Shared fixtures for API unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use serde::Serialize;
use tracing::subscriber::DefaultGuard;

use super::json::JsonWriter;
use crate::error::WriteError;

/// Writer that always fails, standing in for a broken serializer.
#[derive(Debug, Clone, Copy)]
pub struct FailingWriter;

impl JsonWriter for FailingWriter {
    fn write_json<T: Serialize + ?Sized>(
        &self,
        _status: StatusCode,
        _data: &T,
        _headers: Option<&HeaderMap>,
    ) -> Result<Response, WriteError> {
        Err(WriteError::from(
            <serde_json::Error as serde::ser::Error>::custom("writer offline"),
        ))
    }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    /// Captured lines so far.
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn subscriber(buffer: &LogBuffer) -> impl tracing::Subscriber + Send + Sync {
    let writer = buffer.clone();
    tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish()
}

/// Run `f` with a subscriber that records log lines into a buffer.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let buffer = LogBuffer::default();
    let out = tracing::subscriber::with_default(subscriber(&buffer), f);
    (out, buffer.lines())
}

/// Record log lines on this thread until the guard drops.
///
/// For async tests on the current-thread runtime.
pub fn capture_logs_scoped() -> (DefaultGuard, LogBuffer) {
    let buffer = LogBuffer::default();
    let guard = tracing::subscriber::set_default(subscriber(&buffer));
    (guard, buffer)
}
