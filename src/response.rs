//! Response side of the bridge.
//!
//! The application declares its status and headers through
//! [`Responder::start_response`], writes out-of-band body bytes through a
//! [`ResponseSink`], and returns its remaining body as a chunk sequence.
//! [`Responder::build_lambda_response`] folds all of it into the proxy
//! response.

use indexmap::IndexMap;
use std::error::Error;
use std::io;
use tracing::warn;

use crate::core::models::LambdaResponse;
use crate::errors::AdapterError;

/// Status reported when the application never starts a response.
pub const DEFAULT_STATUS: &str = "500";

/// Out-of-band body writes.
pub trait ResponseSink {
    fn append(&mut self, data: &[u8]);
}

/// Sink returned by `start_response`. Also usable with `write!`.
#[derive(Debug)]
pub struct BodyWriter<'a> {
    buffer: &'a mut Vec<u8>,
}

impl ResponseSink for BodyWriter<'_> {
    fn append(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }
}

impl io::Write for BodyWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Per-invocation response state.
#[derive(Debug)]
pub struct Responder {
    status: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
    started: bool,
}

impl Default for Responder {
    fn default() -> Self {
        Self {
            status: DEFAULT_STATUS.to_string(),
            headers: Vec::new(),
            body: Vec::new(),
            started: false,
        }
    }
}

impl Responder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the status code and header list, returning the body sink.
    ///
    /// Only the leading token of `status` is kept, so `"404 Not Found"` is
    /// stored as `"404"`. Headers are kept in order with duplicates.
    /// `exc_info` is accepted for protocol compatibility and ignored.
    pub fn start_response(
        &mut self,
        status: &str,
        headers: Vec<(String, String)>,
        _exc_info: Option<&dyn Error>,
    ) -> BodyWriter<'_> {
        self.status = status.split_whitespace().next().unwrap_or_default().to_string();
        self.headers = headers;
        self.started = true;
        BodyWriter {
            buffer: &mut self.body,
        }
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Assembles the proxy response from buffered bytes followed by `chunks`.
    ///
    /// Buffered bytes and each chunk are decoded as UTF-8 independently.
    /// Header names that repeat keep their last value.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Decode` when the buffer or any chunk is not
    /// valid UTF-8.
    pub fn build_lambda_response<I>(self, chunks: I) -> Result<LambdaResponse, AdapterError>
    where
        I: IntoIterator,
        I::Item: Into<Vec<u8>>,
    {
        if !self.started {
            warn!(
                status = DEFAULT_STATUS,
                "Application returned without starting a response"
            );
        }

        let mut body = String::from_utf8(self.body)?;
        for chunk in chunks {
            body.push_str(&String::from_utf8(chunk.into())?);
        }

        let headers: IndexMap<String, String> = self.headers.into_iter().collect();

        Ok(LambdaResponse {
            status_code: self.status,
            headers,
            body,
        })
    }
}

impl ResponseSink for Responder {
    fn append(&mut self, data: &[u8]) {
        self.body.extend_from_slice(data);
    }
}
