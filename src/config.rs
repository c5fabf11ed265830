//! Client configuration.
//!
//! `Configuration` holds the API token and the HTTP settings used by
//! [`AshbyClient`](crate::AshbyClient). It is an ordinary value owned by the
//! client; there is no process-wide state.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::defaults;
use crate::error::AshbyError;
use crate::pagination::PaginationOptions;

/// Client configuration
#[derive(Debug, Clone)]
pub struct Configuration {
    /// API token, sent as the Basic auth username with an empty password
    pub api_token: Option<SecretString>,
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// User agent
    pub user_agent: Option<String>,
    /// Defaults applied to paginated list calls
    pub pagination: PaginationOptions,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: defaults::API_URL.to_string(),
            timeout: Some(defaults::http::REQUEST_TIMEOUT),
            connect_timeout: Some(defaults::http::CONNECT_TIMEOUT),
            user_agent: Some(defaults::http::USER_AGENT.to_string()),
            pagination: PaginationOptions::default(),
        }
    }
}

impl Configuration {
    /// Create a configuration with default values and no token
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for constructing `Configuration`
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Load the token (and optionally the base URL) from the environment.
    ///
    /// Reads `ASHBY_API_TOKEN` and `ASHBY_BASE_URL`.
    pub fn from_env() -> Result<Self, AshbyError> {
        let token = std::env::var(defaults::env::API_TOKEN)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(AshbyError::MissingApiToken)?;

        let mut builder = Self::builder().api_token(token);
        if let Ok(base_url) = std::env::var(defaults::env::BASE_URL) {
            if !base_url.trim().is_empty() {
                builder = builder.base_url(base_url);
            }
        }
        builder.build()
    }

    /// Mutate the configuration in place
    pub fn configure<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        f(self);
        self
    }

    /// Set the API token
    pub fn set_api_token(&mut self, token: impl Into<String>) {
        self.api_token = Some(SecretString::from(token.into()));
    }

    /// Resets all configuration options to the defaults (clears the token).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a token is configured
    pub fn has_api_token(&self) -> bool {
        self.api_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_empty())
    }

    pub(crate) fn expose_token(&self) -> Result<&str, AshbyError> {
        match &self.api_token {
            Some(token) if !token.expose_secret().is_empty() => Ok(token.expose_secret()),
            _ => Err(AshbyError::MissingApiToken),
        }
    }

    /// Build the `reqwest` client matching this configuration
    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client, AshbyError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        builder.build().map_err(|e| {
            AshbyError::ConfigurationError(format!("Failed to build HTTP client: {e}"))
        })
    }
}

/// Builder for `Configuration`
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    api_token: Option<String>,
    base_url: Option<String>,
    timeout: Option<Option<Duration>>,
    connect_timeout: Option<Option<Duration>>,
    user_agent: Option<String>,
    page_size: Option<u32>,
    max_pages: Option<u32>,
    max_duration: Option<Duration>,
}

impl ConfigurationBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Records requested per page (`limit`)
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Fail paginated calls that would need more than `max_pages` requests
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Fail paginated calls that take longer than `max_duration` overall
    pub fn max_duration(mut self, max_duration: Duration) -> Self {
        self.max_duration = Some(max_duration);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Configuration, AshbyError> {
        let defaults = Configuration::default();

        let base_url = self
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        reqwest::Url::parse(&base_url).map_err(|e| {
            AshbyError::ConfigurationError(format!("Invalid base URL '{base_url}': {e}"))
        })?;

        let mut pagination = defaults.pagination;
        if let Some(page_size) = self.page_size {
            if page_size == 0 {
                return Err(AshbyError::ConfigurationError(
                    "page_size must be greater than zero".to_string(),
                ));
            }
            pagination.page_size = page_size;
        }
        if let Some(max_pages) = self.max_pages {
            if max_pages == 0 {
                return Err(AshbyError::ConfigurationError(
                    "max_pages must be greater than zero".to_string(),
                ));
            }
            pagination.max_pages = Some(max_pages);
        }
        if self.max_duration.is_some() {
            pagination.max_duration = self.max_duration;
        }

        Ok(Configuration {
            api_token: self.api_token.map(SecretString::from),
            base_url,
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            user_agent: self.user_agent.or(defaults.user_agent),
            pagination,
        })
    }
}
