//! Gateway configuration object and helpers.

use std::time::Duration;

use url::Url;

/// Base URL used when neither the flag nor the environment supplies one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = "eventdesk-frontend/0.1";

/// Builder-style configuration for creating the HTTP gateway.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) base_url: Url,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
}

impl ClientConfig {
    /// Construct a configuration pointing at the given backend origin.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the overall request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the user agent sent with every request.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Return the configured backend origin.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
