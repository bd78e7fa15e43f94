//! Error types for the reporting client
//!
//! Every public API returns `Result<T, Error>`. Variants fall into two
//! families: validation errors, raised before any network call, and
//! transport errors, raised by a [`Transport`](crate::transport::Transport)
//! while executing a request. The end of a paginated sequence is not an
//! error and is reported as `Ok(None)`.

use thiserror::Error;

/// The main error type for the reporting client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Unknown parameter '{name}' for operation {operation}")]
    UnknownParameter { operation: String, name: String },

    #[error("Invalid value for parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Operation {operation} returns {actual}, not {expected}")]
    ResponseTypeMismatch {
        operation: String,
        expected: String,
        actual: String,
    },

    #[error("Operation {operation} is not a paged list operation")]
    NotPaginated { operation: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Token refresh failed: {message}")]
    TokenRefresh { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Server repeated page token '{token}'")]
    RepeatedPageToken { token: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a missing parameter error
    pub fn missing_param(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create an unknown parameter error
    pub fn unknown_param(operation: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownParameter {
            operation: operation.into(),
            name: name.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Validation errors are detected locally, before any network call
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter { .. }
                | Error::UnknownParameter { .. }
                | Error::InvalidParameter { .. }
                | Error::ResponseTypeMismatch { .. }
                | Error::NotPaginated { .. }
        )
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the reporting client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_param("jobId");
        assert_eq!(err.to_string(), "Missing required parameter: jobId");

        let err = Error::unknown_param("youtubereporting.jobs.get", "pageSize");
        assert_eq!(
            err.to_string(),
            "Unknown parameter 'pageSize' for operation youtubereporting.jobs.get"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::missing_param("jobId").is_validation());
        assert!(Error::invalid_param("pageSize", "must be positive").is_validation());
        assert!(Error::NotPaginated {
            operation: "youtubereporting.jobs.get".to_string()
        }
        .is_validation());

        assert!(!Error::http_status(500, "").is_validation());
        assert!(!Error::config("bad").is_validation());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::missing_param("jobId").is_retryable());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
