//! In-memory gateway stub for screen tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::outcome::RequestOutcome;
use crate::domain::ports::{ApiGateway, Method};

/// One request as a screen handed it to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedCall {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) body: Option<Value>,
}

/// Gateway that records calls and replays a canned outcome.
pub(crate) struct StubGateway {
    outcome: RequestOutcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubGateway {
    pub(crate) fn returning(outcome: RequestOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn ok() -> Self {
        Self::returning(RequestOutcome::empty_success())
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

#[async_trait]
impl ApiGateway for StubGateway {
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> RequestOutcome {
        let mut guard = self.calls.lock().expect("call log poisoned");
        guard.push(RecordedCall {
            method,
            path: path.to_owned(),
            body: body.cloned(),
        });
        self.outcome.clone()
    }
}
