//! # Application State
//!
//! Core business state for Trove. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── directory: Arc<CountryClient>   // country listing + facts API
//! ├── gem_client: Arc<GemClient>      // restaurant search API
//! ├── session: Session                // selection, favorites, welcome gate
//! ├── countries: CountryCache         // cached country listing
//! ├── page: Page                      // which page is showing
//! ├── detail: Option<CountryDetail>   // facts for the selected country
//! ├── gems: Option<Vec<Gem>>          // last hidden-gems results
//! ├── gems_location: Option<String>   // location those results belong to
//! ├── notice: Option<Notice>          // one-line status banner
//! └── is_fetching_*: bool             // in-flight request flags
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::collections::HashSet;
use std::sync::Arc;

use crate::api::{Country, CountryClient, CountryDetail, Gem, GemClient};

// ============================================================================
// Session
// ============================================================================

/// Per-run user context: what is selected, what is saved, whether the
/// welcome gate has been passed. Fields are private so every change goes
/// through an accessor with defined semantics.
#[derive(Debug, Default, Clone)]
pub struct Session {
    selected: Option<String>,
    favorites: Vec<String>,
    welcome_dismissed: bool,
}

impl Session {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, name: String) {
        self.selected = Some(name);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Appends to favorites unless already present. Returns false on a
    /// duplicate; order of first insertion is preserved.
    pub fn add_favorite(&mut self, name: &str) -> bool {
        if self.is_favorite(name) {
            return false;
        }
        self.favorites.push(name.to_string());
        true
    }

    /// Removes from favorites. Returns false when the name was not there.
    pub fn remove_favorite(&mut self, name: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| f != name);
        self.favorites.len() != before
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.iter().any(|f| f == name)
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn welcome_dismissed(&self) -> bool {
        self.welcome_dismissed
    }

    /// One-way: there is deliberately no way to bring the welcome page back.
    pub fn dismiss_welcome(&mut self) {
        self.welcome_dismissed = true;
    }
}

// ============================================================================
// Country Cache
// ============================================================================

/// Cached country listing. `None` means never loaded (or invalidated), which
/// is distinct from a loaded-but-empty listing after a failed fetch.
#[derive(Debug, Default)]
pub struct CountryCache {
    entries: Option<Vec<Country>>,
}

impl CountryCache {
    /// Replaces the cache contents. Duplicate names are dropped, first
    /// occurrence wins, so names stay unique within the cached set.
    pub fn fill(&mut self, countries: Vec<Country>) {
        let mut seen = HashSet::new();
        let entries = countries
            .into_iter()
            .filter(|c| seen.insert(c.name.clone()))
            .collect();
        self.entries = Some(entries);
    }

    /// Drops the cached listing so the next refresh refetches it.
    pub fn invalidate(&mut self) {
        self.entries = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// The cached rows; empty when nothing is loaded.
    pub fn countries(&self) -> &[Country] {
        self.entries.as_deref().unwrap_or_default()
    }

    /// Case-insensitive exact lookup, returning the canonical entry.
    pub fn find(&self, name: &str) -> Option<&Country> {
        self.countries()
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive substring matches, capped at `limit`. An empty query
    /// matches everything.
    pub fn matching(&self, query: &str, limit: usize) -> Vec<&Country> {
        let query = query.to_lowercase();
        self.countries()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }
}

// ============================================================================
// Pages and Notices
// ============================================================================

/// The two pages of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    HiddenGems,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::HiddenGems => "Hidden Gems",
        }
    }

    pub fn next(self) -> Page {
        match self {
            Page::Home => Page::HiddenGems,
            Page::HiddenGems => Page::Home,
        }
    }
}

/// Severity of a status notice. Drives the banner color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One-line status banner shown under the title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub directory: Arc<CountryClient>,
    pub gem_client: Arc<GemClient>,
    pub session: Session,
    pub countries: CountryCache,
    pub page: Page,
    /// Facts for the currently selected country, once fetched.
    pub detail: Option<CountryDetail>,
    /// Last hidden-gems results. `None` = never searched; `Some(vec![])` =
    /// the search came back empty.
    pub gems: Option<Vec<Gem>>,
    /// The location the current `gems` belong to.
    pub gems_location: Option<String>,
    pub notice: Option<Notice>,
    pub is_fetching_countries: bool,
    pub is_fetching_detail: bool,
    pub is_fetching_gems: bool,
}

impl App {
    pub fn new(directory: Arc<CountryClient>, gem_client: Arc<GemClient>) -> Self {
        Self {
            directory,
            gem_client,
            session: Session::default(),
            countries: CountryCache::default(),
            page: Page::default(),
            detail: None,
            gems: None,
            gems_location: None,
            notice: None,
            is_fetching_countries: false,
            is_fetching_detail: false,
            is_fetching_gems: false,
        }
    }

    /// True while any background fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_fetching_countries || self.is_fetching_detail || self.is_fetching_gems
    }
}
