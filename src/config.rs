use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default Indeed search endpoint
pub const DEFAULT_INDEED_BASE_URL: &str = "http://api.indeed.com/ads/apisearch";

/// Prefix for environment variable overrides, e.g.
/// `INDEED_CLIENT__INDEED__PUBLISHER_ID`
pub const ENV_PREFIX: &str = "INDEED_CLIENT";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub indeed: IndeedConfig,
    pub logging: LoggingConfig,
}

/// Settings for the Indeed publisher API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndeedConfig {
    /// Search endpoint, without query string
    pub base_url: String,
    /// Static publisher key
    pub publisher_id: Option<String>,
    /// API version sent as `v`
    pub version: Option<String>,
    /// Whether the API should wrap matched terms in `<b>` tags
    pub highlight: Option<bool>,
    /// Request timeout
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for IndeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INDEED_BASE_URL.to_string(),
            publisher_id: None,
            version: Some("2".to_string()),
            highlight: None,
            timeout_secs: 30,
            user_agent: format!("indeed-jobs-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl IndeedConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Command-line overrides applied after file and environment sources
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub publisher_id: Option<String>,
    pub base_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from defaults, an optional TOML file and the
    /// environment, in that order of precedence (last wins).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<()> {
        if let Some(publisher_id) = &overrides.publisher_id {
            self.indeed.publisher_id = Some(publisher_id.clone());
        }
        if let Some(base_url) = &overrides.base_url {
            self.indeed.base_url.clone_from(base_url);
        }
        if let Some(level) = &overrides.log_level {
            self.logging.level.clone_from(level);
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.indeed.base_url.trim().is_empty() {
            return Err(Error::InvalidInput {
                field: "indeed.base_url".to_string(),
                reason: "cannot be empty".to_string(),
            });
        }

        Url::parse(&self.indeed.base_url).map_err(|e| Error::InvalidInput {
            field: "indeed.base_url".to_string(),
            reason: e.to_string(),
        })?;

        if self.indeed.timeout_secs == 0 {
            return Err(Error::InvalidInput {
                field: "indeed.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(Error::InvalidInput {
                field: "logging.format".to_string(),
                reason: format!("unknown format '{}'", self.logging.format),
            });
        }

        Ok(())
    }
}
