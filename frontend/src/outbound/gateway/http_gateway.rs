//! Reqwest-backed gateway adapter.
//!
//! This adapter owns transport details only: request dispatch, response
//! classification, and failure message derivation. Every call is a single
//! best-effort attempt; there are no retries and no caching.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::domain::outcome::{BackendErrorBody, Payload, RequestOutcome};
use crate::domain::ports::{ApiGateway, Method};

/// Gateway adapter issuing HTTP requests against one backend origin.
///
/// The adapter holds no mutable state; an outcome is purely a function of
/// the request and the response it provokes.
pub struct HttpRequestGateway {
    client: Client,
    base_url: Url,
}

impl HttpRequestGateway {
    /// Build a gateway from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }
}

#[async_trait]
impl ApiGateway for HttpRequestGateway {
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> RequestOutcome {
        let target = match self.base_url.join(path) {
            Ok(target) => target,
            Err(error) => {
                // The transport never started, so this is a network-kind
                // failure with no status.
                return RequestOutcome::network_failure(format!(
                    "invalid request target {path}: {error}"
                ));
            }
        };

        let mut builder = self.client.request(to_reqwest_method(method), target);
        if let Some(payload) = body {
            builder = builder.json(payload);
        }

        debug!(%method, path, "dispatching API request");
        let response = match builder.send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%method, path, error = %error, "transport failure");
                return RequestOutcome::network_failure(error.to_string());
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(error) => {
                warn!(%method, path, status = status.as_u16(), error = %error, "unreadable response body");
                return RequestOutcome::parse_failure(Some(status.as_u16()), error.to_string());
            }
        };

        let outcome = classify_response(status, &text);
        if let RequestOutcome::Failure { status, ref message, .. } = outcome {
            warn!(%method, path, status = ?status, message = %message, "request failed");
        }
        outcome
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Classify a received response into an outcome.
///
/// Parsing is lenient by design: a success body that is not JSON degrades
/// to raw text rather than surfacing a parse failure.
fn classify_response(status: StatusCode, text: &str) -> RequestOutcome {
    let parsed: Option<Value> = serde_json::from_str(text).ok();
    if status.is_success() {
        return RequestOutcome::Success(success_payload(text, parsed));
    }
    RequestOutcome::http_failure(status.as_u16(), failure_message(status, text, parsed.as_ref()))
}

fn success_payload(text: &str, parsed: Option<Value>) -> Payload {
    if text.is_empty() {
        return Payload::Empty;
    }
    match parsed {
        // The backend's empty-string marker counts as an empty body.
        Some(Value::String(marker)) if marker.is_empty() => Payload::Empty,
        Some(value) => Payload::Json(value),
        None => Payload::Text(text.to_owned()),
    }
}

fn failure_message(status: StatusCode, text: &str, parsed: Option<&Value>) -> String {
    if let Some(body) = parsed.and_then(BackendErrorBody::from_value) {
        return body.display_message();
    }
    let mut message = match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {reason}", status.as_u16()),
        None => format!("HTTP {}", status.as_u16()),
    };
    if !text.is_empty() {
        message.push('\n');
        message.push_str(text);
    }
    message
}
