//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields:
//! - `TitleBar`: Top bar showing the page, a spinner, and the status banner
//! - `WelcomePage`: Full-screen greeting gate
//! - `MapView`: World map with country dots and the selection marker
//! - `CountryInfo`: Facts pane for the selected country
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state across frames and emit events.
//! Persistent `*State` structs live in `TuiState`; a transient wrapper
//! borrows them during render:
//! - `SearchBox`: Text input with a suggestion dropdown
//! - `Favorites`: Sidebar list with its own cursor
//! - `GemList`: Scrollable result cards
//!
//! ## Co-location of Concerns
//!
//! Each component file contains everything related to that component: state
//! types, event types, rendering, event handling, and tests. You can read
//! one file to understand how a component works.

mod title_bar;
pub use title_bar::TitleBar;

pub mod country_info;
pub mod favorites;
pub mod gem_list;
pub mod map_view;
pub mod search_box;
pub mod welcome;

pub use country_info::CountryInfo;
pub use favorites::{FavoriteEvent, Favorites, FavoritesState};
pub use gem_list::{GemList, GemListState};
pub use map_view::MapView;
pub use search_box::{SearchBox, SearchEvent};
pub use welcome::WelcomePage;
