//! Configuration types.

use std::time::Duration;

/// Onboarding flow configuration.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Absolute URL of the content metadata endpoint.
    pub endpoint: String,
    /// Timeout applied to each content request.
    pub request_timeout: Duration,
}

impl FlowConfig {
    /// Create a configuration for the given content endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Override the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
