use std::time::Duration;
use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (permanent failures)
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    // Client errors
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Service temporarily unavailable: {service} - {reason}")]
    ServiceUnavailable { service: String, reason: String },

    #[error("Timeout error: operation timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("Parse error in {context}: {message}")]
    Parse { context: String, message: String },

    // Provider errors
    #[error("Provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// Provider error conversion
impl From<crate::client::providers::ProviderError> for Error {
    fn from(err: crate::client::providers::ProviderError) -> Self {
        use crate::client::providers::ProviderError;

        match err {
            ProviderError::Network(msg) => Self::Provider(format!("Network error: {msg}")),
            ProviderError::Parse(msg) => Self::Parse {
                context: "provider".to_string(),
                message: msg,
            },
            ProviderError::HttpStatus { status, body } => match status {
                500..=599 => Self::ServiceUnavailable {
                    service: "provider".to_string(),
                    reason: format!("HTTP {status}: {body}"),
                },
                _ => Self::Provider(format!("HTTP {status}: {body}")),
            },
            ProviderError::Timeout(timeout) => Self::Timeout { timeout },
            ProviderError::Other(msg) => Self::Provider(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::providers::ProviderError;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput {
            field: "indeed.base_url".to_string(),
            reason: "cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid input: indeed.base_url - cannot be empty"
        );
    }

    #[test]
    fn test_provider_error_conversion() {
        let err: Error = ProviderError::HttpStatus {
            status: 503,
            body: "down".to_string(),
        }
        .into();
        assert!(matches!(err, Error::ServiceUnavailable { .. }));

        let err: Error = ProviderError::HttpStatus {
            status: 403,
            body: "bad publisher".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Provider(_)));

        let err: Error = ProviderError::Parse("unexpected token".to_string()).into();
        assert!(matches!(err, Error::Parse { ref context, .. } if context == "provider"));

        let err: Error = ProviderError::Timeout(Duration::from_secs(5)).into();
        assert!(matches!(err, Error::Timeout { timeout } if timeout == Duration::from_secs(5)));
    }

    #[test]
    fn test_serde_error_conversion() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Serde(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
