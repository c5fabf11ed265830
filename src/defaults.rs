//! Default Configuration Values
//!
//! This module centralizes the default values used by the client so they can be
//! adjusted in one place.

use std::time::Duration;

/// Base URL of the Ashby API
pub const API_URL: &str = "https://api.ashbyhq.com";

/// Environment variables read by [`Configuration::from_env`](crate::Configuration::from_env)
pub mod env {
    /// API token used as the Basic auth username
    pub const API_TOKEN: &str = "ASHBY_API_TOKEN";

    /// Optional override of the API base URL
    pub const BASE_URL: &str = "ASHBY_BASE_URL";
}

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("ashby-rs/", env!("CARGO_PKG_VERSION"));
}

/// Pagination defaults
pub mod pagination {
    /// Number of records requested per page (`limit` field)
    pub const PAGE_SIZE: u32 = 100;
}
