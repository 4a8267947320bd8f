//! # Hidden Gems Client
//!
//! reqwest client for the Yelp-shaped business search behind the hidden-gems
//! page. One endpoint, `GET /businesses/search`, always asking for the five
//! top-rated "hidden gems" restaurants within 20 km of a location.
//!
//! The credential is injected at startup (env var or config file), never
//! compiled in. A missing key fails the search with [`ApiError::Config`]
//! before any request goes out, so the rest of the app works without one.

use log::{debug, info, warn};
use serde::Deserialize;

use crate::api::ApiError;
use crate::api::types::Gem;

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    businesses: Vec<RawBusiness>,
}

#[derive(Deserialize, Debug, Default)]
struct RawBusiness {
    #[serde(default)]
    name: String,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    location: RawLocation,
}

#[derive(Deserialize, Debug, Default)]
struct RawLocation {
    #[serde(default)]
    display_address: Vec<String>,
}

/// Flattens business records into display rows. The address lines join into
/// one comma-separated string.
fn raw_to_gems(raw: Vec<RawBusiness>) -> Vec<Gem> {
    raw.into_iter()
        .map(|b| Gem {
            name: b.name,
            rating: b.rating,
            address: b.location.display_address.join(", "),
        })
        .collect()
}

// ============================================================================
// Client
// ============================================================================

/// Client for the business search API.
pub struct GemClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl GemClient {
    /// Creates a new business search client.
    ///
    /// # Arguments
    /// * `api_key` - Bearer token for the search API, if one is configured
    /// * `base_url` - Optional custom base URL (defaults to the public Yelp
    ///   endpoint)
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.yelp.com/v3".to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Searches for hidden-gem restaurants near `location`.
    pub async fn search(&self, location: &str) -> Result<Vec<Gem>, ApiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ApiError::Config(
                "no API key set (YELP_API_KEY env var or [yelp] api_key in the config file)"
                    .to_string(),
            )
        })?;

        info!("Searching hidden gems near '{location}'");

        let response = self
            .client
            .get(format!("{}/businesses/search", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .query(&[
                ("term", "hidden gems"),
                ("location", location),
                ("categories", "restaurants"),
                ("sort_by", "rating"),
                ("radius", "20000"),
                ("limit", "5"),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Business search response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Business search error: {} - {}", status, err_body);
            return Err(ApiError::Api {
                status,
                message: err_body,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        let gems = raw_to_gems(body.businesses);
        info!("Business search returned {} result(s) for '{location}'", gems.len());
        Ok(gems)
    }
}
