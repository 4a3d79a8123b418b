//! Console rendering of request outcomes.
//!
//! The sink is the only place that turns an outcome into display text, so
//! screens stay free of formatting decisions.

use std::io::Write;

use crate::domain::outcome::{FailureKind, Payload, RequestOutcome};
use crate::domain::ports::{OutcomeSink, SinkError};

/// Notice shown for a success with no usable body.
pub const EMPTY_BODY_NOTICE: &str = "Request succeeded with an empty response body.";

/// Render target writing one line-terminated block per outcome.
pub struct ConsoleSink<W> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    /// Wrap a writer, typically a locked stdout handle.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer; used by tests to inspect output.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutcomeSink for ConsoleSink<W> {
    fn present(&mut self, outcome: &RequestOutcome) -> Result<(), SinkError> {
        // Rendering is staged into a string first so a failure leaves the
        // surface untouched rather than half-written.
        let rendered = render_outcome(outcome)?;
        writeln!(self.writer, "{rendered}").map_err(|error| SinkError::write(error.to_string()))
    }
}

fn render_outcome(outcome: &RequestOutcome) -> Result<String, SinkError> {
    match outcome {
        RequestOutcome::Success(Payload::Json(value)) => serde_json::to_string_pretty(value)
            .map_err(|error| SinkError::write(error.to_string())),
        RequestOutcome::Success(Payload::Text(text)) => Ok(text.clone()),
        RequestOutcome::Success(Payload::Empty) => Ok(EMPTY_BODY_NOTICE.to_owned()),
        RequestOutcome::Failure { kind, message, .. } => Ok(match kind {
            FailureKind::Http => message.clone(),
            FailureKind::Network => format!("Network failure: {message}"),
            FailureKind::Parse => format!("Could not parse response: {message}"),
        }),
    }
}
