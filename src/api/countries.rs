//! # Country Directory Client
//!
//! reqwest client for the country directory service. Two endpoints:
//! - `GET /all` — the full listing (name + coordinates) that seeds the cache
//! - `GET /name/{name}?fullText=true` — the exact-match lookup behind the
//!   facts pane
//!
//! Lookup misses are not errors: a 404, an empty array, or a malformed body
//! maps to [`CountryDetail::unavailable`] so the facts pane can render its
//! sentinel rows. Transport failures and server errors surface as [`ApiError`]
//! for the caller to turn into a notice.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::api::ApiError;
use crate::api::types::{Country, CountryDetail};

// ============================================================================
// Wire Types
// ============================================================================

/// One entry of the `/all` listing. Every field is optional on the wire;
/// translation decides what survives.
#[derive(Deserialize, Debug)]
struct RawCountry {
    #[serde(default)]
    name: Option<RawName>,
    #[serde(default)]
    latlng: Option<Vec<f64>>,
}

#[derive(Deserialize, Debug)]
struct RawName {
    #[serde(default)]
    common: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawFlags {
    #[serde(default)]
    png: Option<String>,
}

/// One record of the `/name/{name}` response.
#[derive(Deserialize, Debug, Default)]
struct RawDetail {
    #[serde(default)]
    name: Option<RawName>,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    population: Option<u64>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    subregion: Option<String>,
    #[serde(default)]
    flags: Option<RawFlags>,
    #[serde(default)]
    borders: Vec<String>,
    #[serde(default)]
    languages: BTreeMap<String, String>,
    #[serde(default)]
    timezones: Vec<String>,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Converts the raw `/all` listing into cache rows.
///
/// Entries without a `latlng` array or a common name are dropped. A `latlng`
/// that is present but too short keeps the entry with the missing axis at 0.0.
fn raw_to_countries(raw: Vec<RawCountry>) -> Vec<Country> {
    raw.into_iter()
        .filter_map(|entry| {
            let name = entry.name.and_then(|n| n.common)?;
            let latlng = entry.latlng?;
            Some(Country {
                name,
                latitude: latlng.first().copied().unwrap_or(0.0),
                longitude: latlng.get(1).copied().unwrap_or(0.0),
            })
        })
        .collect()
}

/// Converts a raw detail record field by field. Missing sub-fields stay
/// missing (the display layer substitutes per field); only the first capital
/// is kept. Languages come keyed by code on the wire; we keep the names,
/// ordered by code so output is deterministic.
fn raw_to_detail(raw: RawDetail) -> CountryDetail {
    CountryDetail {
        name: raw.name.and_then(|n| n.common),
        capital: raw.capital.into_iter().next(),
        population: raw.population,
        region: raw.region,
        subregion: raw.subregion,
        flag_url: raw.flags.and_then(|f| f.png),
        borders: raw.borders,
        languages: raw.languages.into_values().collect(),
        timezones: raw.timezones,
    }
}

// ============================================================================
// Client
// ============================================================================

/// Client for the country directory API.
pub struct CountryClient {
    base_url: String,
    client: reqwest::Client,
}

impl CountryClient {
    /// Creates a new country directory client.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public
    ///   restcountries endpoint)
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| "https://restcountries.com/v3.1".to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the full country listing.
    pub async fn fetch_all(&self) -> Result<Vec<Country>, ApiError> {
        info!("Fetching country listing from {}/all", self.base_url);

        let response = self
            .client
            .get(format!("{}/all", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Country listing response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Country listing error: {} - {}", status, err_body);
            return Err(ApiError::Api {
                status,
                message: err_body,
            });
        }

        let raw: Vec<RawCountry> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        let countries = raw_to_countries(raw);
        info!("Country listing loaded: {} usable entries", countries.len());
        Ok(countries)
    }

    /// Fetches the facts for one country by exact name match.
    ///
    /// Returns the all-sentinel detail when the directory has no record for
    /// `name`; returns an error only for transport or server failures.
    pub async fn fetch_detail(&self, name: &str) -> Result<CountryDetail, ApiError> {
        info!("Fetching country detail for '{name}'");

        let response = self
            .client
            .get(format!("{}/name/{}", self.base_url, name))
            .query(&[("fullText", "true")])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Country detail response status: {}", response.status());

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            info!("No directory record for '{name}'");
            return Ok(CountryDetail::unavailable());
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Country detail error: {} - {}", status, err_body);
            return Err(ApiError::Api {
                status,
                message: err_body,
            });
        }

        let records: Vec<RawDetail> = match response.json().await {
            Ok(records) => records,
            Err(e) => {
                warn!("Country detail body for '{name}' was malformed: {e}");
                return Ok(CountryDetail::unavailable());
            }
        };

        match records.into_iter().next() {
            Some(raw) => Ok(raw_to_detail(raw)),
            None => {
                info!("Empty detail response for '{name}'");
                Ok(CountryDetail::unavailable())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::NOT_AVAILABLE;

    fn raw_country(json: &str) -> RawCountry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_listing_drops_entries_without_coordinates_or_name() {
        let raw = vec![
            raw_country(r#"{"name":{"common":"Nepal"},"latlng":[28.0,84.0]}"#),
            raw_country(r#"{"name":{"common":"Atlantis"}}"#),
            raw_country(r#"{"latlng":[1.0,2.0]}"#),
            raw_country(r#"{"name":{},"latlng":[1.0,2.0]}"#),
        ];

        let countries = raw_to_countries(raw);

        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name, "Nepal");
        assert_eq!(countries[0].latitude, 28.0);
        assert_eq!(countries[0].longitude, 84.0);
    }

    #[test]
    fn test_listing_defaults_short_latlng_to_zero() {
        let raw = vec![
            raw_country(r#"{"name":{"common":"Lat Only"},"latlng":[10.5]}"#),
            raw_country(r#"{"name":{"common":"No Axes"},"latlng":[]}"#),
        ];

        let countries = raw_to_countries(raw);

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].latitude, 10.5);
        assert_eq!(countries[0].longitude, 0.0);
        assert_eq!(countries[1].latitude, 0.0);
        assert_eq!(countries[1].longitude, 0.0);
    }

    #[test]
    fn test_detail_maps_all_fields() {
        let raw: RawDetail = serde_json::from_str(
            r#"{
                "name": {"common": "Nepal"},
                "capital": ["Kathmandu"],
                "population": 29136808,
                "region": "Asia",
                "subregion": "Southern Asia",
                "flags": {"png": "https://flags.example/np.png"},
                "borders": ["CHN", "IND"],
                "languages": {"nep": "Nepali"},
                "timezones": ["UTC+05:45"]
            }"#,
        )
        .unwrap();

        let detail = raw_to_detail(raw);

        assert_eq!(detail.name.as_deref(), Some("Nepal"));
        assert_eq!(detail.capital.as_deref(), Some("Kathmandu"));
        assert_eq!(detail.population, Some(29136808));
        assert_eq!(detail.region.as_deref(), Some("Asia"));
        assert_eq!(detail.subregion.as_deref(), Some("Southern Asia"));
        assert_eq!(detail.flag_url.as_deref(), Some("https://flags.example/np.png"));
        assert_eq!(detail.borders, vec!["CHN", "IND"]);
        assert_eq!(detail.languages, vec!["Nepali"]);
        assert_eq!(detail.timezones, vec!["UTC+05:45"]);
    }

    #[test]
    fn test_detail_keeps_only_first_capital() {
        let raw: RawDetail = serde_json::from_str(
            r#"{"name":{"common":"South Africa"},"capital":["Pretoria","Cape Town","Bloemfontein"]}"#,
        )
        .unwrap();

        let detail = raw_to_detail(raw);

        assert_eq!(detail.capital.as_deref(), Some("Pretoria"));
    }

    #[test]
    fn test_detail_orders_languages_by_code() {
        // BTreeMap keys sort, so the value order is stable regardless of
        // the order the wire delivers them in.
        let raw: RawDetail = serde_json::from_str(
            r#"{"name":{"common":"Switzerland"},"languages":{"roh":"Romansh","fra":"French","gsw":"Swiss German","ita":"Italian"}}"#,
        )
        .unwrap();

        let detail = raw_to_detail(raw);

        assert_eq!(
            detail.languages,
            vec!["French", "Swiss German", "Italian", "Romansh"]
        );
    }

    #[test]
    fn test_detail_missing_fields_render_as_sentinels() {
        let detail = raw_to_detail(RawDetail::default());

        for (_, value) in detail.rows() {
            assert_eq!(value, NOT_AVAILABLE);
        }
    }
}
