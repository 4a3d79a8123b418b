//! Normalized result of one API call.
//!
//! A [`RequestOutcome`] is constructed once per call by the gateway adapter
//! and consumed immediately by a sink. It is never stored or compared across
//! calls, so the whole model is plain owned data.

use serde::Deserialize;
use serde_json::Value;

/// Success payload carried by a completed call.
///
/// `Empty` marks an empty body (or the backend's JSON empty-string marker)
/// and is distinct from `Json` wrapping an empty object or array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Parsed JSON body.
    Json(Value),
    /// Non-JSON body retained verbatim; a degraded but valid success.
    Text(String),
    /// The body was empty or the empty-string marker.
    Empty,
}

/// Classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A response arrived with a non-success status.
    Http,
    /// The transport produced no response at all.
    Network,
    /// The received body could not be read; a true last resort, since
    /// malformed JSON on a success status degrades to text instead.
    Parse,
}

/// Normalized result of one API call: success payload or classified failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The call completed with a success status.
    Success(Payload),
    /// The call failed; `status` is present only when a response arrived.
    Failure {
        kind: FailureKind,
        status: Option<u16>,
        message: String,
    },
}

impl RequestOutcome {
    /// Wrap a parsed JSON body.
    #[must_use]
    pub fn success(value: Value) -> Self {
        Self::Success(Payload::Json(value))
    }

    /// Mark a success with no usable body.
    #[must_use]
    pub fn empty_success() -> Self {
        Self::Success(Payload::Empty)
    }

    /// Helper for transport-level failures where no response was received.
    pub fn network_failure(message: impl Into<String>) -> Self {
        Self::Failure {
            kind: FailureKind::Network,
            status: None,
            message: message.into(),
        }
    }

    /// Helper for responses with a non-success status.
    pub fn http_failure(status: u16, message: impl Into<String>) -> Self {
        Self::Failure {
            kind: FailureKind::Http,
            status: Some(status),
            message: message.into(),
        }
    }

    /// Helper for bodies that could not be read after a response arrived.
    pub fn parse_failure(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Failure {
            kind: FailureKind::Parse,
            status,
            message: message.into(),
        }
    }

    /// Whether the call completed in the success range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Structured error body produced by the backend's centralized exception
/// handler: a JSON object carrying at least `error` and `message`.
///
/// Extraction either succeeds or the caller falls back to status-line
/// messaging; there is no ad hoc property probing elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendErrorBody {
    pub error: String,
    pub message: String,
}

impl BackendErrorBody {
    /// Extract the structured shape from a parsed body, if it fits.
    ///
    /// Extra fields are ignored; a missing or non-string `error`/`message`
    /// means the body is not the backend's error shape.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Self::deserialize(value).ok()
    }

    /// Human-readable message in the `"<error>: <message>"` form.
    #[must_use]
    pub fn display_message(&self) -> String {
        format!("{}: {}", self.error, self.message)
    }
}
