//! Error types and retry classification for the indicators crate.
//!
//! This module provides:
//! - [`IndicatorError`]: Errors that reach callers of the engine
//! - [`ProviderError`]: Adapter-internal failures, absorbed at the adapter boundary
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors surfaced by the indicator engine.
///
/// "No data" is never an error: an exhausted resolution is a normal result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    /// The country input could not be resolved to an ISO identity.
    /// User-visible and fatal to the request.
    #[error("Invalid country name: {0}")]
    InvalidCountry(String),

    /// The indicator key is not registered in the matrix.
    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),

    /// A matrix entry failed boot-time validation.
    #[error("Invalid indicator matrix entry '{key}': {reason}")]
    InvalidMatrix {
        /// The offending indicator key
        key: String,
        /// What was wrong with it
        reason: String,
    },

    /// A matrix candidate names a provider with no registered adapter.
    #[error("Indicator '{key}' references unknown provider '{provider}'")]
    UnknownProvider {
        /// The indicator key holding the candidate
        key: String,
        /// The unregistered provider id
        provider: String,
    },
}

/// Failures inside a provider adapter.
///
/// These never cross the adapter boundary: `SeriesProvider::fetch` turns every
/// one of them into an empty series after logging it.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The call exceeded the caller-supplied timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// Transport-level failure (DNS, connect, reset).
    #[error("Network error: {provider} - {message}")]
    Network {
        /// The provider being called
        provider: String,
        /// Underlying transport error
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    Status {
        /// The provider that answered
        provider: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body did not have the expected shape.
    #[error("Parse error: {provider} - {message}")]
    Parse {
        /// The provider whose payload failed to parse
        provider: String,
        /// Parser message
        message: String,
    },

    /// The provider has no endpoint for this request.
    #[error("Unsupported request for provider: {provider}")]
    Unsupported {
        /// The provider that cannot serve the request
        provider: String,
    },
}

impl ProviderError {
    /// Map a reqwest failure into the matching variant.
    pub fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::Status {
                provider: provider.to_string(),
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::Parse {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        } else {
            Self::Network {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }

    pub fn parse(provider: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Returns the retry classification for this error.
    ///
    /// Only transient transport failures are retried:
    ///
    /// - [`RetryClass::WithBackoff`]: `Timeout`, `Network`
    /// - [`RetryClass::Never`]: `Status`, `Parse`, `Unsupported`
    ///
    /// # Examples
    ///
    /// ```
    /// use country_radar_indicators::errors::{ProviderError, RetryClass};
    ///
    /// let error = ProviderError::Timeout { provider: "imf".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = ProviderError::Status { provider: "imf".to_string(), status: 503 };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => RetryClass::WithBackoff,
            Self::Status { .. } | Self::Parse { .. } | Self::Unsupported { .. } => {
                RetryClass::Never
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_retries_with_backoff() {
        let error = ProviderError::Timeout {
            provider: "world_bank".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_network_retries_with_backoff() {
        let error = ProviderError::Network {
            provider: "eurostat".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_server_error_status_never_retries() {
        let error = ProviderError::Status {
            provider: "ecb".to_string(),
            status: 500,
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_parse_error_never_retries() {
        let error = ProviderError::parse("imf", "missing series.docs");
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_unsupported_never_retries() {
        let error = ProviderError::Unsupported {
            provider: "oecd".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_error_display() {
        let error = IndicatorError::InvalidCountry("Narnia".to_string());
        assert_eq!(format!("{}", error), "Invalid country name: Narnia");

        let error = IndicatorError::UnknownProvider {
            key: "policy_rate".to_string(),
            provider: "bis".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Indicator 'policy_rate' references unknown provider 'bis'"
        );

        let error = ProviderError::Status {
            provider: "world_bank".to_string(),
            status: 404,
        };
        assert_eq!(format!("{}", error), "HTTP 404 from world_bank");
    }
}
