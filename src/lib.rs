//! ashby
//!
//! Async client for the [Ashby](https://www.ashbyhq.com) recruiting API.
//!
//! Every operation is one authenticated JSON request against
//! `https://api.ashbyhq.com/<endpoint>`; list endpoints are followed page by
//! page until the server reports no more data.
//!
//! ```rust,no_run
//! use ashby::AshbyClient;
//!
//! # async fn run() -> Result<(), ashby::AshbyError> {
//! let client = AshbyClient::builder().api_token("my-token").build()?;
//!
//! let jobs = client.jobs().list().await?;
//! let jane = client.candidates().search(Some("jane@company.com"), None).await?;
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod http;
pub mod pagination;
pub mod resources;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{AshbyClient, AshbyClientBuilder};
pub use config::{Configuration, ConfigurationBuilder};
pub use error::AshbyError;
pub use pagination::PaginationOptions;
pub use resources::hiring_team::HiringTeamTarget;
pub use types::Payload;

/// Commonly used types
pub mod prelude {
    pub use crate::client::{AshbyClient, AshbyClientBuilder};
    pub use crate::config::Configuration;
    pub use crate::error::AshbyError;
    pub use crate::pagination::PaginationOptions;
    pub use crate::resources::hiring_team::HiringTeamTarget;
    pub use crate::types::Payload;
}
