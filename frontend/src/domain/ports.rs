//! Ports at the edges of the front-end.
//!
//! Screens talk to the backend through [`ApiGateway`] and hand results to an
//! [`OutcomeSink`]. Both traits keep the screens free of transport and
//! terminal details, so tests can substitute in-memory implementations.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::outcome::RequestOutcome;

/// HTTP methods the backend resources respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Canonical wire spelling of the method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gateway port: one best-effort request, one normalized outcome.
///
/// Implementations never return an error or panic past this boundary; every
/// failure mode is folded into the [`RequestOutcome`] value. Overlapping
/// calls complete independently with no ordering guarantee.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// Issue a request against the configured base URL.
    ///
    /// When `body` is present it is serialized as JSON and the request
    /// declares a JSON content type.
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> RequestOutcome;
}

/// Errors surfaced by a render target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The sink's underlying writer rejected the output.
    #[error("outcome sink write failed: {message}")]
    Write { message: String },
}

impl SinkError {
    /// Helper for writer-level failures.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}

/// Render-target port: a display surface receiving one outcome per call.
///
/// A failed call leaves the surface otherwise unchanged; sinks must not
/// produce partial updates for failures.
pub trait OutcomeSink {
    /// Render one outcome.
    fn present(&mut self, outcome: &RequestOutcome) -> Result<(), SinkError>;
}
