//! # Actions
//!
//! Everything that can happen in Trove becomes an `Action`.
//! User presses Ctrl+R? That's `Action::Randomize`.
//! A fetch finishes? That's `Action::CountriesLoaded(list)`.
//!
//! The `update()` function applies an action to the state and hands back the
//! `Effect` the caller must run. No I/O happens here; fetches are described,
//! not performed.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state and
//! the effect. And debuggable: log every action, replay the exact session.

use rand::Rng;

use crate::api::{Country, CountryDetail, Gem};
use crate::core::state::{App, Notice};

/// Shown when a gems search legitimately comes back with nothing.
pub const EMPTY_GEMS_TEXT: &str = "That's a great choice :). But unfortunately, we don't have enough information on this location yet. Soon to be updated ;)";

// ============================================================================
// Actions and Effects
// ============================================================================

/// Which background fetch an outcome belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    Countries,
    /// Carries the name the fetch was issued for, so a late failure can be
    /// matched against the current selection just like `DetailLoaded`.
    Detail(String),
    Gems,
}

/// Everything that can happen in the app.
#[derive(Debug, Clone)]
pub enum Action {
    // -- user intents --
    DismissWelcome,
    /// Select a country by name. Unknown names are allowed; the detail fetch
    /// decides what exists.
    Select(String),
    ClearSelection,
    /// Jump to a random cached country.
    Randomize,
    /// Add the selected country to favorites.
    AddFavorite,
    /// Remove the selected country from favorites.
    RemoveFavorite,
    /// Remove a specific favorite (from the favorites pane).
    RemoveFavoriteNamed(String),
    SwitchPage,
    /// Search hidden gems near a location.
    SearchGems(String),
    /// Drop the cached listing and fetch it again.
    RefreshCountries,
    Quit,

    // -- fetch outcomes (sent back from background tasks) --
    CountriesLoaded(Vec<Country>),
    DetailLoaded { name: String, detail: CountryDetail },
    GemsLoaded { location: String, gems: Vec<Gem> },
    FetchFailed { kind: FetchKind, message: String },
}

/// What the caller must do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    FetchCountries,
    FetchDetail(String),
    FetchGems(String),
    Quit,
}

// ============================================================================
// Reducer
// ============================================================================

/// Applies `action` to `state` and returns the effect to run.
pub fn update(state: &mut App, action: Action) -> Effect {
    // User-driven actions start from a clean banner; each arm below sets its
    // own when it has something to say. Fetch outcomes keep whatever banner
    // is up unless they replace it.
    if matches!(
        action,
        Action::DismissWelcome
            | Action::Select(_)
            | Action::ClearSelection
            | Action::Randomize
            | Action::AddFavorite
            | Action::RemoveFavorite
            | Action::RemoveFavoriteNamed(_)
            | Action::SwitchPage
            | Action::SearchGems(_)
            | Action::RefreshCountries
    ) {
        state.notice = None;
    }

    match action {
        Action::DismissWelcome => {
            state.session.dismiss_welcome();
            Effect::None
        }

        Action::Select(name) => select_country(state, name),

        Action::ClearSelection => {
            state.session.clear_selection();
            state.detail = None;
            // Any in-flight detail result will be discarded as stale, so the
            // flag must not wait on it.
            state.is_fetching_detail = false;
            Effect::None
        }

        Action::Randomize => {
            if state.countries.countries().is_empty() {
                state.notice = Some(Notice::warning("No countries loaded yet."));
                return Effect::None;
            }
            let countries = state.countries.countries();
            let name = countries[rand::rng().random_range(0..countries.len())]
                .name
                .clone();
            select_country(state, name)
        }

        Action::AddFavorite => {
            let Some(name) = state.session.selected().map(str::to_string) else {
                state.notice = Some(Notice::info("No country selected."));
                return Effect::None;
            };
            if state.session.add_favorite(&name) {
                state.notice = Some(Notice::success(format!("Added {name} to favorites!")));
            } else {
                state.notice = Some(Notice::warning("Country already in favorites."));
            }
            Effect::None
        }

        Action::RemoveFavorite => {
            let Some(name) = state.session.selected().map(str::to_string) else {
                state.notice = Some(Notice::info("No country selected."));
                return Effect::None;
            };
            if state.session.remove_favorite(&name) {
                state.notice = Some(Notice::success(format!("Removed {name} from favorites.")));
            } else {
                state.notice = Some(Notice::info("Country not in favorites."));
            }
            Effect::None
        }

        Action::RemoveFavoriteNamed(name) => {
            if state.session.remove_favorite(&name) {
                state.notice = Some(Notice::success(format!("Removed {name} from favorites")));
            } else {
                state.notice = Some(Notice::info("Country not in favorites."));
            }
            Effect::None
        }

        Action::SwitchPage => {
            state.page = state.page.next();
            Effect::None
        }

        Action::SearchGems(location) => {
            let location = location.trim().to_string();
            if location.is_empty() {
                state.notice = Some(Notice::warning("Please enter a location."));
                return Effect::None;
            }
            state.is_fetching_gems = true;
            state.notice = Some(Notice::info("Fetching hidden gems..."));
            Effect::FetchGems(location)
        }

        Action::RefreshCountries => {
            state.countries.invalidate();
            state.is_fetching_countries = true;
            Effect::FetchCountries
        }

        Action::Quit => Effect::Quit,

        Action::CountriesLoaded(countries) => {
            state.is_fetching_countries = false;
            state.countries.fill(countries);
            Effect::None
        }

        Action::DetailLoaded { name, detail } => {
            // A late result for a selection that changed underneath is
            // dropped whole; the newer fetch still owns the in-flight flag.
            if state.session.selected() == Some(name.as_str()) {
                state.is_fetching_detail = false;
                state.detail = Some(detail);
            }
            Effect::None
        }

        Action::GemsLoaded { location, gems } => {
            state.is_fetching_gems = false;
            if gems.is_empty() {
                state.notice = Some(Notice::warning(EMPTY_GEMS_TEXT));
            } else {
                state.notice = Some(Notice::success(format!(
                    "Found them! Treasure spots for you to visit in {location}:"
                )));
            }
            state.gems = Some(gems);
            state.gems_location = Some(location);
            Effect::None
        }

        Action::FetchFailed { kind, message } => {
            match kind {
                FetchKind::Countries => {
                    state.is_fetching_countries = false;
                    // Loaded-but-empty, so the UI stops waiting and F5 can retry.
                    state.countries.fill(Vec::new());
                    state.notice = Some(Notice::error(format!(
                        "Error fetching countries data: {message}"
                    )));
                }
                FetchKind::Detail(name) => {
                    // Same staleness rule as DetailLoaded: a failure for a
                    // superseded selection is dropped whole.
                    if state.session.selected() == Some(name.as_str()) {
                        state.is_fetching_detail = false;
                        state.detail = Some(CountryDetail::unavailable());
                        state.notice = Some(Notice::error(format!(
                            "Error fetching country details: {message}"
                        )));
                    }
                }
                FetchKind::Gems => {
                    state.is_fetching_gems = false;
                    // A failed search reads as loaded-but-empty, same as the listing.
                    state.gems = Some(Vec::new());
                    state.gems_location = None;
                    state.notice = Some(Notice::error("Failed to fetch hidden gems :("));
                }
            }
            Effect::None
        }
    }
}

/// Shared by Select and Randomize: canonicalize the name through the cache,
/// record the selection, and ask for its facts. A blank name clears instead.
fn select_country(state: &mut App, name: String) -> Effect {
    let name = name.trim().to_string();
    if name.is_empty() {
        state.session.clear_selection();
        state.detail = None;
        state.is_fetching_detail = false;
        return Effect::None;
    }
    let name = match state.countries.find(&name) {
        Some(c) => c.name.clone(),
        None => name,
    };
    state.session.select(name.clone());
    state.detail = None;
    state.is_fetching_detail = true;
    Effect::FetchDetail(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{NoticeLevel, Page};
    use crate::test_support::test_app;

    fn country(name: &str, lat: f64, lon: f64) -> Country {
        Country {
            name: name.to_string(),
            latitude: lat,
            longitude: lon,
        }
    }

    fn loaded_app() -> App {
        let mut app = test_app();
        app.countries.fill(vec![
            country("Nepal", 28.0, 84.0),
            country("Chile", -30.0, -71.0),
            country("Kenya", 1.0, 38.0),
        ]);
        app
    }

    fn notice_text(app: &App) -> &str {
        app.notice.as_ref().map(|n| n.text.as_str()).unwrap_or("")
    }

    #[test]
    fn test_dismiss_welcome_is_one_way() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::DismissWelcome), Effect::None);
        assert!(app.session.welcome_dismissed());

        update(&mut app, Action::DismissWelcome);
        assert!(app.session.welcome_dismissed());
    }

    #[test]
    fn test_select_canonicalizes_through_cache() {
        let mut app = loaded_app();

        let effect = update(&mut app, Action::Select("nepal".to_string()));

        assert_eq!(effect, Effect::FetchDetail("Nepal".to_string()));
        assert_eq!(app.session.selected(), Some("Nepal"));
        assert!(app.is_fetching_detail);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_select_unknown_country_still_fetches() {
        let mut app = loaded_app();

        let effect = update(&mut app, Action::Select("Wakanda".to_string()));

        assert_eq!(effect, Effect::FetchDetail("Wakanda".to_string()));
        assert_eq!(app.session.selected(), Some("Wakanda"));
    }

    #[test]
    fn test_select_blank_clears_selection() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Nepal".to_string()));

        let effect = update(&mut app, Action::Select("   ".to_string()));

        assert_eq!(effect, Effect::None);
        assert!(app.session.selected().is_none());
        assert!(app.detail.is_none());
        assert!(!app.is_fetching_detail);
    }

    #[test]
    fn test_clear_selection_preserves_favorites() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Nepal".to_string()));
        update(&mut app, Action::AddFavorite);

        update(&mut app, Action::ClearSelection);

        assert!(app.session.selected().is_none());
        assert!(!app.is_fetching_detail);
        assert_eq!(app.session.favorites(), ["Nepal"]);
    }

    #[test]
    fn test_randomize_picks_a_cached_country() {
        let mut app = loaded_app();

        let effect = update(&mut app, Action::Randomize);

        let selected = app.session.selected().unwrap().to_string();
        assert!(app.countries.find(&selected).is_some());
        assert_eq!(effect, Effect::FetchDetail(selected));
    }

    #[test]
    fn test_randomize_with_empty_cache_warns() {
        let mut app = test_app();

        let effect = update(&mut app, Action::Randomize);

        assert_eq!(effect, Effect::None);
        assert!(app.session.selected().is_none());
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Warning);
    }

    #[test]
    fn test_add_favorite_then_duplicate() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Nepal".to_string()));

        update(&mut app, Action::AddFavorite);
        assert_eq!(notice_text(&app), "Added Nepal to favorites!");

        update(&mut app, Action::AddFavorite);
        assert_eq!(notice_text(&app), "Country already in favorites.");
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Warning);
        assert_eq!(app.session.favorites(), ["Nepal"]);
    }

    #[test]
    fn test_add_favorite_without_selection() {
        let mut app = loaded_app();

        update(&mut app, Action::AddFavorite);

        assert_eq!(notice_text(&app), "No country selected.");
        assert!(app.session.favorites().is_empty());
    }

    #[test]
    fn test_remove_favorite_then_absent() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Nepal".to_string()));
        update(&mut app, Action::AddFavorite);

        update(&mut app, Action::RemoveFavorite);
        assert_eq!(notice_text(&app), "Removed Nepal from favorites.");
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Success);

        update(&mut app, Action::RemoveFavorite);
        assert_eq!(notice_text(&app), "Country not in favorites.");
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Info);
        assert!(app.session.favorites().is_empty());
    }

    #[test]
    fn test_remove_favorite_named_from_pane() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Chile".to_string()));
        update(&mut app, Action::AddFavorite);

        update(&mut app, Action::RemoveFavoriteNamed("Chile".to_string()));

        assert_eq!(notice_text(&app), "Removed Chile from favorites");
        // Removing a favorite does not touch the selection.
        assert_eq!(app.session.selected(), Some("Chile"));
    }

    #[test]
    fn test_switch_page_preserves_session() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Nepal".to_string()));
        update(&mut app, Action::AddFavorite);

        update(&mut app, Action::SwitchPage);
        assert_eq!(app.page, Page::HiddenGems);
        assert_eq!(app.session.selected(), Some("Nepal"));
        assert_eq!(app.session.favorites(), ["Nepal"]);

        update(&mut app, Action::SwitchPage);
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_search_gems_blank_is_rejected() {
        let mut app = test_app();

        let effect = update(&mut app, Action::SearchGems("   ".to_string()));

        assert_eq!(effect, Effect::None);
        assert!(!app.is_fetching_gems);
        assert_eq!(notice_text(&app), "Please enter a location.");
    }

    #[test]
    fn test_search_gems_trims_and_fetches() {
        let mut app = test_app();

        let effect = update(&mut app, Action::SearchGems("  Kathmandu  ".to_string()));

        assert_eq!(effect, Effect::FetchGems("Kathmandu".to_string()));
        assert!(app.is_fetching_gems);
        assert_eq!(notice_text(&app), "Fetching hidden gems...");
    }

    #[test]
    fn test_gems_loaded_sets_success_notice() {
        let mut app = test_app();
        update(&mut app, Action::SearchGems("Paris".to_string()));

        update(
            &mut app,
            Action::GemsLoaded {
                location: "Paris".to_string(),
                gems: vec![Gem {
                    name: "Le Coin".to_string(),
                    rating: 4.8,
                    address: "1 Rue X, Paris".to_string(),
                }],
            },
        );

        assert!(!app.is_fetching_gems);
        assert_eq!(
            notice_text(&app),
            "Found them! Treasure spots for you to visit in Paris:"
        );
        assert_eq!(app.gems.as_ref().unwrap().len(), 1);
        assert_eq!(app.gems_location.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_gems_loaded_empty_warns() {
        let mut app = test_app();

        update(
            &mut app,
            Action::GemsLoaded {
                location: "Atlantis".to_string(),
                gems: Vec::new(),
            },
        );

        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Warning);
        assert_eq!(notice_text(&app), EMPTY_GEMS_TEXT);
        assert_eq!(app.gems.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_countries_loaded_fills_cache() {
        let mut app = test_app();
        app.is_fetching_countries = true;

        update(
            &mut app,
            Action::CountriesLoaded(vec![country("Nepal", 28.0, 84.0)]),
        );

        assert!(!app.is_fetching_countries);
        assert!(app.countries.is_loaded());
        assert_eq!(app.countries.countries().len(), 1);
    }

    #[test]
    fn test_detail_loaded_for_current_selection() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Nepal".to_string()));

        let mut detail = CountryDetail::unavailable();
        detail.name = Some("Nepal".to_string());
        update(
            &mut app,
            Action::DetailLoaded {
                name: "Nepal".to_string(),
                detail,
            },
        );

        assert!(!app.is_fetching_detail);
        assert_eq!(app.detail.as_ref().unwrap().name.as_deref(), Some("Nepal"));
    }

    #[test]
    fn test_detail_loaded_stale_is_discarded() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Nepal".to_string()));
        update(&mut app, Action::Select("Chile".to_string()));

        update(
            &mut app,
            Action::DetailLoaded {
                name: "Nepal".to_string(),
                detail: CountryDetail::unavailable(),
            },
        );

        // Nepal's facts arrived after Chile took the selection; Chile's
        // fetch is still in flight.
        assert!(app.detail.is_none());
        assert!(app.is_fetching_detail);
    }

    #[test]
    fn test_fetch_failed_countries_defaults_to_empty_cache() {
        let mut app = test_app();
        app.is_fetching_countries = true;

        update(
            &mut app,
            Action::FetchFailed {
                kind: FetchKind::Countries,
                message: "connection refused".to_string(),
            },
        );

        assert!(!app.is_fetching_countries);
        assert!(app.countries.is_loaded());
        assert!(app.countries.countries().is_empty());
        assert_eq!(
            notice_text(&app),
            "Error fetching countries data: connection refused"
        );
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_fetch_failed_detail_shows_sentinels() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Nepal".to_string()));

        update(
            &mut app,
            Action::FetchFailed {
                kind: FetchKind::Detail("Nepal".to_string()),
                message: "HTTP 500".to_string(),
            },
        );

        assert!(!app.is_fetching_detail);
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(*detail, CountryDetail::unavailable());
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_fetch_failed_detail_stale_is_discarded() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Nepal".to_string()));
        update(&mut app, Action::Select("Chile".to_string()));

        update(
            &mut app,
            Action::FetchFailed {
                kind: FetchKind::Detail("Nepal".to_string()),
                message: "connection reset".to_string(),
            },
        );

        // Nepal's failure must not plant sentinel rows or an error banner
        // while Chile's fetch is still in flight.
        assert!(app.is_fetching_detail);
        assert!(app.detail.is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_fetch_failed_gems_degrades_to_empty() {
        let mut app = test_app();
        update(
            &mut app,
            Action::GemsLoaded {
                location: "Paris".to_string(),
                gems: vec![Gem {
                    name: "Le Coin".to_string(),
                    rating: 4.8,
                    address: "1 Rue X".to_string(),
                }],
            },
        );

        update(
            &mut app,
            Action::FetchFailed {
                kind: FetchKind::Gems,
                message: "HTTP 429".to_string(),
            },
        );

        assert_eq!(notice_text(&app), "Failed to fetch hidden gems :(");
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Error);
        assert_eq!(app.gems.as_deref(), Some(&[][..]));
        assert!(app.gems_location.is_none());
    }

    #[test]
    fn test_user_action_clears_stale_notice() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("Nepal".to_string()));
        update(&mut app, Action::AddFavorite);
        assert!(app.notice.is_some());

        update(&mut app, Action::SwitchPage);

        assert!(app.notice.is_none());
    }

    #[test]
    fn test_refresh_invalidates_and_refetches() {
        let mut app = loaded_app();

        let effect = update(&mut app, Action::RefreshCountries);

        assert_eq!(effect, Effect::FetchCountries);
        assert!(!app.countries.is_loaded());
        assert!(app.is_fetching_countries);
    }
}
