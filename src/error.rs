//! Error types for the hub client.
//!
//! All failures surface as [`HubError`]. The enum mirrors the failure
//! taxonomy of the hub boundary: transport failures, upstream rejections,
//! model-resolution failures and local configuration problems.

use thiserror::Error;

/// Error type covering every operation of the client.
#[derive(Debug, Error, Clone)]
pub enum HubError {
    /// HTTP transport error (connection, TLS, body read, decode)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Upstream returned a non-2xx status
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Error message from the response body
        message: String,
        /// Additional error details, when the body was structured JSON
        details: Option<serde_json::Value>,
    },

    /// Completion request rejected after exhausting the configured retries
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Vector-store operation failed
    #[error("{0}")]
    VectorStore(String),

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A model short name could not be resolved to a provider/model pair
    #[error("Model resolution error: {0}")]
    ModelResolution(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Invalid input supplied by the caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Streaming error
    #[error("Stream error: {0}")]
    StreamError(String),

    /// Internal invariant violation
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Coarse error category, useful for logging and higher-level handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network/transport problems
    Network,
    /// 4xx-class upstream rejections and invalid local input
    Client,
    /// 5xx-class upstream failures
    Server,
    /// Local configuration problems
    Configuration,
    /// Everything else
    Other,
}

impl HubError {
    /// Convenience constructor for upstream rejections.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Categorize the error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::StreamError(_) => ErrorCategory::Network,
            Self::ApiError { code, .. } => {
                if *code >= 500 {
                    ErrorCategory::Server
                } else {
                    ErrorCategory::Client
                }
            }
            Self::BadRequest(_) | Self::InvalidInput(_) | Self::ModelResolution(_) => {
                ErrorCategory::Client
            }
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::VectorStore(_) | Self::JsonError(_) | Self::InternalError(_) => {
                ErrorCategory::Other
            }
        }
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// The completion path retries every error regardless (see
    /// `RetryPolicy::retry_all`); this classification exists for callers that
    /// want to be more selective.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) | Self::StreamError(_) => true,
            Self::ApiError { code, .. } => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for HubError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        assert_eq!(
            HubError::api_error(404, "not found").category(),
            ErrorCategory::Client
        );
        assert_eq!(
            HubError::api_error(503, "unavailable").category(),
            ErrorCategory::Server
        );
        assert_eq!(
            HubError::HttpError("connection reset".into()).category(),
            ErrorCategory::Network
        );
        assert_eq!(
            HubError::ConfigurationError("missing base url".into()).category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_retryability() {
        assert!(HubError::api_error(500, "oops").is_retryable());
        assert!(HubError::api_error(429, "slow down").is_retryable());
        assert!(!HubError::api_error(400, "bad").is_retryable());
        assert!(!HubError::ModelResolution("unknown model".into()).is_retryable());
    }

    #[test]
    fn test_display_keeps_upstream_message() {
        let err = HubError::api_error(429, "rate limited");
        assert!(err.to_string().contains("rate limited"));
    }
}
