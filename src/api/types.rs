//! Domain types shared by the API clients and the core state.
//!
//! The remote services are allowed to omit almost anything, so the detail
//! fields are optional and collapse to a single sentinel string at display
//! time rather than failing the whole fetch.

use serde::{Deserialize, Serialize};

/// Sentinel shown for any detail field the directory did not provide.
pub const NOT_AVAILABLE: &str = "Not available";

/// One row of the country cache: a display name plus map coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Country {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Descriptive facts about a single country.
///
/// Every field is independently optional; [`CountryDetail::rows`] turns the
/// whole struct into the nine labelled strings the info panel renders,
/// substituting [`NOT_AVAILABLE`] wherever the upstream record was silent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CountryDetail {
    pub name: Option<String>,
    pub capital: Option<String>,
    pub population: Option<u64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub flag_url: Option<String>,
    pub borders: Vec<String>,
    pub languages: Vec<String>,
    pub timezones: Vec<String>,
}

impl CountryDetail {
    /// A detail record with every field missing — what a lookup for a
    /// nonexistent country resolves to.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// The nine labelled display rows, in panel order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", opt_text(&self.name)),
            ("Capital", opt_text(&self.capital)),
            (
                "Population",
                self.population
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            ("Region", opt_text(&self.region)),
            ("Subregion", opt_text(&self.subregion)),
            ("Flag", opt_text(&self.flag_url)),
            ("Borders", list_text(&self.borders)),
            ("Languages", list_text(&self.languages)),
            ("Timezones", list_text(&self.timezones)),
        ]
    }
}

/// One "hidden gem" search result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Gem {
    pub name: String,
    pub rating: f64,
    pub address: String,
}

fn opt_text(field: &Option<String>) -> String {
    match field {
        Some(s) if !s.is_empty() => s.clone(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn list_text(items: &[String]) -> String {
    if items.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_detail_renders_all_nine_sentinels() {
        let detail = CountryDetail::unavailable();
        let rows = detail.rows();
        assert_eq!(rows.len(), 9);
        for (label, value) in rows {
            assert_eq!(value, NOT_AVAILABLE, "field {label} should be sentinel");
        }
    }

    #[test]
    fn test_rows_prefer_present_fields() {
        let detail = CountryDetail {
            name: Some("Nepal".to_string()),
            capital: Some("Kathmandu".to_string()),
            population: Some(29_136_808),
            region: Some("Asia".to_string()),
            subregion: None,
            flag_url: Some("https://flagcdn.com/w320/np.png".to_string()),
            borders: vec!["CHN".to_string(), "IND".to_string()],
            languages: vec!["Nepali".to_string()],
            timezones: vec!["UTC+05:45".to_string()],
        };
        let rows = detail.rows();
        assert_eq!(rows[0], ("Name", "Nepal".to_string()));
        assert_eq!(rows[2], ("Population", "29136808".to_string()));
        assert_eq!(rows[4], ("Subregion", NOT_AVAILABLE.to_string()));
        assert_eq!(rows[6], ("Borders", "CHN, IND".to_string()));
    }

    #[test]
    fn test_empty_string_field_counts_as_missing() {
        let detail = CountryDetail {
            region: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(detail.rows()[3].1, NOT_AVAILABLE);
    }

    #[test]
    fn test_country_serialization_round_trip() {
        let country = Country {
            name: "France".to_string(),
            latitude: 46.0,
            longitude: 2.0,
        };
        let json = serde_json::to_string(&country).unwrap();
        let back: Country = serde_json::from_str(&json).unwrap();
        assert_eq!(back, country);
    }
}
