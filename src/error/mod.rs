//! Error Handling Module
//!
//! This module provides the error type shared by every operation of the client:
//! - Core error type (`AshbyError`)
//! - Classification helpers (`status_code`, `is_client_error`, ...)
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use ashby::AshbyError;
//!
//! let error = AshbyError::api_error(404, "Not found");
//! assert_eq!(error.status_code(), Some(404));
//! assert!(error.is_client_error());
//! ```

// Module declarations
mod conversions;
pub mod types;

// Re-exports for public API
pub use types::*;
