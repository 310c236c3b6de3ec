pub mod jobs_client;
pub mod providers;
pub mod transport;

pub use jobs_client::{JobsClient, SearchResult};
pub use transport::{HttpTransport, Transport};

use crate::config::IndeedConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client configuration for provider requests
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout duration
    pub timeout: Duration,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&IndeedConfig::default())
    }
}

impl From<&IndeedConfig> for HttpClientConfig {
    fn from(config: &IndeedConfig) -> Self {
        Self {
            timeout: config.timeout(),
            connect_timeout: Duration::from_secs(10).min(config.timeout()),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Per-search parameters, independent of any provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text keyword query
    pub keyword: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Page of results to start from
    pub page: Option<u32>,
    /// Results per page
    pub count: Option<u32>,
}
