pub mod client;
pub mod config;
pub mod error;
pub mod job;

pub use client::providers::{IndeedProvider, JobProvider, ProviderError};
pub use client::{HttpClientConfig, HttpTransport, JobsClient, SearchParams, SearchResult, Transport};
pub use crate::config::{Config, ConfigOverrides};
pub use error::{Error, Result};
pub use job::Job;
