//! Core error type.

use thiserror::Error;

/// Errors returned by the Ashby client.
///
/// Nothing is retried internally; every variant surfaces to the immediate caller.
#[derive(Error, Debug, Clone)]
pub enum AshbyError {
    /// Caller input rejected before any request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No API token configured
    #[error("Missing API token: set one on the configuration or via ASHBY_API_TOKEN")]
    MissingApiToken,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Transport-level failure (connection, TLS, body read)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Non-success HTTP status
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// A mutating call's envelope reported `success: false`
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// Response body was not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Pagination stopped by the configured page cap
    #[error("Pagination exceeded the configured limit of {max_pages} pages")]
    PaginationLimitExceeded { max_pages: u32 },

    /// Request or aggregation timed out
    #[error("Timeout: {0}")]
    TimeoutError(String),
}

impl AshbyError {
    /// Create an API error from a status code and message
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// HTTP status code carried by the error, if any
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// 4xx responses
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(code) if (400..500).contains(&code))
    }

    /// 5xx responses
    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(code) if code >= 500)
    }

    /// Errors raised before any network call
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::MissingApiToken)
    }
}
