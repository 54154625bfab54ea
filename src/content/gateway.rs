//! Content gateway — fetches the remote content document over HTTP.

use async_trait::async_trait;
use reqwest::Url;

use crate::config::FlowConfig;
use crate::error::{ConfigError, ContentError};

use super::model::ContentResponse;

/// Source of the remote content document.
///
/// The trait seam exists so the cache and orchestrator can be exercised
/// against a stub in tests.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Fetch the content response envelope. Transport failures surface as
    /// [`ContentError::Http`]; an undecodable body as
    /// [`ContentError::Malformed`].
    async fn fetch(&self) -> Result<ContentResponse, ContentError>;
}

/// HTTP implementation backed by a shared reqwest client.
#[derive(Debug)]
pub struct HttpContentGateway {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpContentGateway {
    /// Build a gateway for the configured endpoint.
    pub fn new(config: &FlowConfig) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            url: config.endpoint.clone(),
            reason: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ContentGateway for HttpContentGateway {
    async fn fetch(&self) -> Result<ContentResponse, ContentError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| ContentError::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| ContentError::Http(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ContentError::Http(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ContentError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_endpoint() {
        let config = FlowConfig::new("not a url");
        let err = HttpContentGateway::new(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }

    #[test]
    fn accepts_absolute_endpoint() {
        let config = FlowConfig::new("https://cdn.example/_assets/onboarding.json");
        assert!(HttpContentGateway::new(&config).is_ok());
    }
}
