//! HTTP Headers Utility
//!
//! Builds the header set sent with every Ashby request.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::AshbyError;

/// `Basic base64("<token>:")`: the token is the username, the password is empty.
pub fn basic_auth_value(token: &str) -> String {
    let credentials = format!("{token}:");
    format!("Basic {}", STANDARD.encode(credentials))
}

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add Basic authorization using the API token
    pub fn with_basic_auth(mut self, token: &str) -> Result<Self, AshbyError> {
        let mut value = HeaderValue::from_str(&basic_auth_value(token)).map_err(|e| {
            AshbyError::ConfigurationError(format!("Invalid API token format: {e}"))
        })?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Ask for a JSON response
    pub fn with_json_accept(mut self) -> Self {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        self
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Add user agent
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, AshbyError> {
        self.headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| AshbyError::ConfigurationError(format!("Invalid user agent: {e}")))?,
        );
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
