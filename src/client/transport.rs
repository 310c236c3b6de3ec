use crate::client::providers::ProviderError;
use crate::client::HttpClientConfig;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Performs a provider's request and hands back the decoded JSON body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_json(&self, method: Method, url: &str) -> Result<Value, ProviderError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &HttpClientConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ProviderError::Other(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_json(&self, method: Method, url: &str) -> Result<Value, ProviderError> {
        debug!("{} {}", method, url);

        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                if e.is_timeout() {
                    ProviderError::Timeout(self.timeout)
                } else if e.is_connect() {
                    ProviderError::Network(format!("Connection failed: {e}"))
                } else {
                    ProviderError::Network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read error body from {}: {}", url, e);
                    String::new()
                }
            };
            error!("Request to {} returned HTTP {}", url, status);
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(format!("Failed to read response: {e}")))?;

        serde_json::from_str(&body)
            .map_err(|e| ProviderError::Parse(format!("Failed to parse JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_creation() {
        let transport = HttpTransport::new(&HttpClientConfig::default());
        assert!(transport.is_ok());
    }
}
