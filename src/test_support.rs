//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::api::{CountryClient, GemClient};
use crate::core::state::App;

/// Creates a test App whose clients point at a loopback address nothing
/// listens on. Reducer and render tests never issue requests.
pub fn test_app() -> App {
    App::new(
        Arc::new(CountryClient::new(Some("http://127.0.0.1:9".to_string()))),
        Arc::new(GemClient::new(
            Some("test-key".to_string()),
            Some("http://127.0.0.1:9".to_string()),
        )),
    )
}
