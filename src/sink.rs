use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Failure reported by a [`ResponseSink`] write
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    /// The write would push the body past its configured byte limit
    #[error("response limit of {limit} bytes exceeded (attempted {attempted} bytes)")]
    LimitExceeded { limit: usize, attempted: usize },
}

/// Destination for response bytes.
///
/// A write either stores all of `bytes` or none of them.
pub trait ResponseSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), WriteError>;
}

/// In-memory response body, turned into an HTTP response once the handler is done
#[derive(Debug, Default)]
pub struct BufferedBody {
    buf: Vec<u8>,
    limit: Option<usize>,
}

impl BufferedBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a body that rejects writes taking it past `limit` bytes
    pub fn with_limit(limit: usize) -> Self {
        Self {
            buf: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl ResponseSink for BufferedBody {
    fn write(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        let attempted = self.buf.len() + bytes.len();
        if let Some(limit) = self.limit {
            if attempted > limit {
                return Err(WriteError::LimitExceeded { limit, attempted });
            }
        }

        self.buf.extend_from_slice(bytes);
        Ok(())
    }
}

impl IntoResponse for BufferedBody {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            Body::from(self.buf),
        )
            .into_response()
    }
}
