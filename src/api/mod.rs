//! # Remote API Clients
//!
//! Typed reqwest clients for the two services the app consumes: the country
//! directory (list + per-country facts) and the business search used for
//! hidden-gem restaurants. Both take an injectable base URL so integration
//! tests can point them at a mock server.
//!
//! Errors share one taxonomy, [`ApiError`]; variants carry enough info for
//! the caller to decide what notice to surface.

use std::fmt;

pub mod countries;
pub mod gems;
pub mod types;

pub use countries::CountryClient;
pub use gems::GemClient;
pub use types::{Country, CountryDetail, Gem, NOT_AVAILABLE};

/// Errors that can occur while talking to a remote service.
#[derive(Debug)]
pub enum ApiError {
    /// Client misconfigured (missing API key, bad URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service returned a non-success status.
    Api { status: u16, message: String },
    /// The response body did not match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
