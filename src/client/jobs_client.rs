use crate::client::providers::{JobProvider, ProviderError};
use crate::client::transport::Transport;
use crate::job::Job;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Jobs returned by one provider request
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Normalized jobs in response order
    pub jobs: Vec<Job>,
    /// Provider that produced the jobs
    pub source: String,
    /// Time taken by the request and mapping
    pub search_time: Duration,
    /// URL that was requested
    pub request_url: String,
}

/// Runs a single provider's search through a transport
pub struct JobsClient<P, T> {
    provider: P,
    transport: T,
}

impl<P: JobProvider, T: Transport> JobsClient<P, T> {
    pub const fn new(provider: P, transport: T) -> Self {
        Self {
            provider,
            transport,
        }
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetch one page of listings and map them into jobs
    pub async fn search(&self) -> Result<SearchResult, ProviderError> {
        let start_time = Instant::now();
        let source = self.provider.name().to_string();

        if self.provider.format() != "json" {
            return Err(ProviderError::Other(format!(
                "{} uses unsupported response format '{}'",
                source,
                self.provider.format()
            )));
        }

        let url = self.provider.url();
        info!("Searching {} for jobs", source);

        let body = self
            .transport
            .fetch_json(self.provider.verb(), &url)
            .await?;

        let jobs = self.jobs_from_response(body);
        let search_time = start_time.elapsed();

        info!(
            "{} search completed: {} jobs found in {:?}",
            source,
            jobs.len(),
            search_time
        );

        Ok(SearchResult {
            jobs,
            source,
            search_time,
            request_url: url,
        })
    }

    /// Map every listing under the provider's listings path.
    ///
    /// A body without the listings array yields no jobs; listings that are
    /// not JSON objects are skipped.
    pub fn jobs_from_response(&self, body: Value) -> Vec<Job> {
        let path = self.provider.listings_path();

        let listings = match body {
            Value::Object(mut map) => match map.remove(path) {
                Some(Value::Array(listings)) => listings,
                Some(other) => {
                    warn!("Expected an array under '{}', found {}", path, other);
                    return Vec::new();
                }
                None => {
                    debug!("Response has no '{}' key", path);
                    return Vec::new();
                }
            },
            other => {
                warn!("Expected a JSON object response, found {}", other);
                return Vec::new();
            }
        };

        listings
            .into_iter()
            .filter_map(|listing| match listing {
                Value::Object(record) => Some(self.provider.create_job(record)),
                other => {
                    warn!("Skipping non-object listing: {}", other);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::providers::IndeedProvider;
    use async_trait::async_trait;
    use reqwest::Method;
    use serde_json::json;
    use std::sync::Mutex;

    /// Transport returning a canned body and remembering the request
    struct CannedTransport {
        body: Value,
        requests: Mutex<Vec<(Method, String)>>,
    }

    impl CannedTransport {
        fn new(body: Value) -> Self {
            Self {
                body,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn fetch_json(&self, method: Method, url: &str) -> Result<Value, ProviderError> {
            self.requests.lock().unwrap().push((method, url.to_string()));
            Ok(self.body.clone())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn fetch_json(&self, _method: Method, _url: &str) -> Result<Value, ProviderError> {
            Err(ProviderError::HttpStatus {
                status: 500,
                body: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_search_maps_results() {
        let transport = CannedTransport::new(json!({
            "totalResults": 2,
            "results": [
                {"jobtitle": "Baker", "formattedLocation": "Austin, TX", "jobkey": "k1", "url": "u1"},
                {"jobtitle": "Barista", "formattedLocation": "Remote", "jobkey": "k2", "url": "u2"}
            ]
        }));
        let provider = IndeedProvider::new().with_keyword("food");
        let client = JobsClient::new(provider, transport);

        let result = client.search().await.unwrap();

        assert_eq!(result.source, "indeed");
        assert_eq!(result.jobs.len(), 2);
        assert_eq!(result.jobs[0].city.as_deref(), Some("Austin"));
        assert_eq!(result.jobs[1].source_id, "k2");
        assert!(result.request_url.ends_with("format=json&q=food"));

        let requests = client.transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, Method::GET);
        assert_eq!(requests[0].1, result.request_url);
    }

    #[test]
    fn test_missing_or_malformed_listings() {
        let client = JobsClient::new(IndeedProvider::new(), CannedTransport::new(Value::Null));

        assert!(client.jobs_from_response(json!({})).is_empty());
        assert!(client.jobs_from_response(json!({"results": "none"})).is_empty());
        assert!(client.jobs_from_response(json!([1, 2])).is_empty());

        let jobs = client.jobs_from_response(json!({"results": [42, {"jobtitle": "Cook"}]}));
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Cook");
    }

    #[tokio::test]
    async fn test_transport_errors_propagate() {
        let client = JobsClient::new(IndeedProvider::new(), FailingTransport);
        let err = client.search().await.unwrap_err();
        assert!(matches!(err, ProviderError::HttpStatus { status: 500, .. }));
    }
}
