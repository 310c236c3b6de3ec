use crate::job::Job;
use reqwest::Method;
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

/// A single element of a provider's listings array
pub type RawRecord = Map<String, Value>;

/// Errors that can occur while talking to a job-search provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Timeout occurred after {0:?}")]
    Timeout(Duration),

    #[error("Provider error: {0}")]
    Other(String),
}

/// Capability set every job-board provider implements.
///
/// A provider only knows how to describe its request and how to map one
/// raw listing into a [`Job`]. Performing the request is the job of a
/// [`Transport`](crate::client::Transport).
pub trait JobProvider: Send + Sync {
    /// Unique name/identifier for this provider
    fn name(&self) -> &str;

    /// Fully built request URL, query string included
    fn url(&self) -> String;

    /// HTTP verb used for the listings request
    fn verb(&self) -> Method {
        Method::GET
    }

    /// Response body format
    fn format(&self) -> &str;

    /// Top-level key of the response holding the listings array
    fn listings_path(&self) -> &str;

    /// Map one raw listing into a normalized job
    fn create_job(&self, record: RawRecord) -> Job;
}
