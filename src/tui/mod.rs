//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (welcome page, any fetch in flight): draws every ~80ms so
//!   the pulse and spinner stay smooth.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{CountryClient, GemClient};
use crate::core::action::{Action, Effect, FetchKind, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Page};
use crate::tui::component::EventHandler;
use crate::tui::components::{FavoriteEvent, FavoritesState, GemListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Longest suggestion dropdown under the search box.
const MAX_SUGGESTIONS: usize = 8;

/// Which pane receives focus-routed key events on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The country search box. Typing lands here.
    Search,
    /// The favorites sidebar (Ctrl+O).
    Favorites,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search_box: SearchBox,
    pub location_box: SearchBox,
    pub favorites_state: FavoritesState,
    pub gem_list_state: GemListState,
    // Focus on the home page
    pub focus: Focus,
    // Animation state
    pub pulse_value: f32,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(" Search for a Country "),
            location_box: SearchBox::new(" Enter the country to find hidden gems "),
            favorites_state: FavoritesState::new(),
            gem_list_state: GemListState::new(),
            focus: Focus::Search,
            pulse_value: 0.0,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for the search boxes
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let directory = Arc::new(CountryClient::new(Some(config.directory_base_url.clone())));
    let gem_client = Arc::new(GemClient::new(
        config.yelp_api_key.clone(),
        Some(config.yelp_base_url.clone()),
    ));
    let mut app = App::new(directory, gem_client);
    let mut tui = TuiState::new();

    if config.skip_welcome {
        update(&mut app, Action::DismissWelcome);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background fetches
    let (tx, rx) = mpsc::channel();

    // Prime the country cache right away; the fetch overlaps the welcome page.
    let effect = update(&mut app, Action::RefreshCountries);
    handle_effect(effect, &app, &tx);

    if let Some(name) = config.start_country {
        let effect = update(&mut app, Action::Select(name));
        handle_effect(effect, &app, &tx);
    }

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with app state
        tui.search_box.focused = app.page == Page::Home && tui.focus == Focus::Search;
        tui.location_box.focused = app.page == Page::HiddenGems;
        tui.favorites_state.sync(app.session.favorites().len());
        tui.search_box.suggestions = if tui.search_box.buffer.is_empty() {
            Vec::new()
        } else {
            let matches: Vec<String> = app
                .countries
                .matching(&tui.search_box.buffer, MAX_SUGGESTIONS)
                .iter()
                .map(|c| c.name.clone())
                .collect();
            // An exact match needs no dropdown
            if matches.len() == 1 && matches[0].eq_ignore_ascii_case(&tui.search_box.buffer) {
                Vec::new()
            } else {
                matches
            }
        };

        // Welcome pulse and fetch spinner both want continuous frames
        let animating = !app.session.welcome_dismissed() || app.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // The welcome page swallows everything except Enter and quit
            if !app.session.welcome_dismissed() {
                match event {
                    TuiEvent::Quit => should_quit |= dispatch(&mut app, Action::Quit, &tx),
                    TuiEvent::Submit => {
                        dispatch(&mut app, Action::DismissWelcome, &tx);
                    }
                    _ => {}
                }
                continue;
            }

            match event {
                TuiEvent::Quit => should_quit |= dispatch(&mut app, Action::Quit, &tx),
                TuiEvent::SwitchPage => {
                    dispatch(&mut app, Action::SwitchPage, &tx);
                    tui.focus = Focus::Search;
                }
                TuiEvent::Randomize => {
                    dispatch(&mut app, Action::Randomize, &tx);
                }
                TuiEvent::ClearSelection => {
                    dispatch(&mut app, Action::ClearSelection, &tx);
                }
                TuiEvent::Favorite => {
                    dispatch(&mut app, Action::AddFavorite, &tx);
                }
                TuiEvent::Unfavorite => {
                    dispatch(&mut app, Action::RemoveFavorite, &tx);
                }
                TuiEvent::Refresh => {
                    dispatch(&mut app, Action::RefreshCountries, &tx);
                }
                TuiEvent::FocusFavorites => {
                    if app.page == Page::Home {
                        tui.focus = Focus::Favorites;
                    }
                }
                other => route_focused(&mut app, &mut tui, &other, &tx),
            }
        }

        // Handle background fetch outcomes
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if handle_effect(effect, &app, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run an action through the reducer, then launch whatever effect it asked
/// for. Returns true when the app should quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let effect = update(app, action);
    handle_effect(effect, app, tx)
}

fn handle_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::FetchCountries => {
            spawn_fetch_countries(app.directory.clone(), tx.clone());
            false
        }
        Effect::FetchDetail(name) => {
            spawn_fetch_detail(app.directory.clone(), name, tx.clone());
            false
        }
        Effect::FetchGems(location) => {
            spawn_fetch_gems(app.gem_client.clone(), location, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

/// Route an event to whichever pane has focus.
fn route_focused(app: &mut App, tui: &mut TuiState, event: &TuiEvent, tx: &mpsc::Sender<Action>) {
    match app.page {
        Page::HiddenGems => {
            // Scroll events always go to the card stack
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.gem_list_state.handle_event(event);
                return;
            }
            if let Some(SearchEvent::Submit(location)) = tui.location_box.handle_event(event) {
                dispatch(app, Action::SearchGems(location), tx);
                tui.gem_list_state.reset();
            }
        }
        Page::Home => match tui.focus {
            Focus::Favorites => {
                let fav_event = tui
                    .favorites_state
                    .handle_event(event, app.session.favorites());
                match fav_event {
                    Some(FavoriteEvent::Open(name)) => {
                        dispatch(app, Action::Select(name), tx);
                        tui.focus = Focus::Search;
                    }
                    Some(FavoriteEvent::Remove(name)) => {
                        dispatch(app, Action::RemoveFavoriteNamed(name), tx);
                        tui.favorites_state.sync(app.session.favorites().len());
                    }
                    Some(FavoriteEvent::Dismiss) => tui.focus = Focus::Search,
                    None => {}
                }
            }
            Focus::Search => {
                if let Some(SearchEvent::Submit(name)) = tui.search_box.handle_event(event) {
                    dispatch(app, Action::Select(name), tx);
                }
            }
        },
    }
}

fn spawn_fetch_countries(client: Arc<CountryClient>, tx: mpsc::Sender<Action>) {
    info!("Spawning country cache fetch");
    tokio::spawn(async move {
        let action = match client.fetch_all().await {
            Ok(countries) => Action::CountriesLoaded(countries),
            Err(e) => {
                warn!("Country cache fetch failed: {}", e);
                Action::FetchFailed {
                    kind: FetchKind::Countries,
                    message: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send country cache result: receiver dropped");
        }
    });
}

fn spawn_fetch_detail(client: Arc<CountryClient>, name: String, tx: mpsc::Sender<Action>) {
    info!("Spawning detail fetch for '{}'", name);
    tokio::spawn(async move {
        let action = match client.fetch_detail(&name).await {
            Ok(detail) => Action::DetailLoaded { name, detail },
            Err(e) => {
                warn!("Detail fetch for '{}' failed: {}", name, e);
                Action::FetchFailed {
                    kind: FetchKind::Detail(name),
                    message: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send detail result: receiver dropped");
        }
    });
}

fn spawn_fetch_gems(client: Arc<GemClient>, location: String, tx: mpsc::Sender<Action>) {
    info!("Spawning hidden gems search for '{}'", location);
    tokio::spawn(async move {
        let action = match client.search(&location).await {
            Ok(gems) => Action::GemsLoaded { location, gems },
            Err(e) => {
                warn!("Hidden gems search for '{}' failed: {}", location, e);
                Action::FetchFailed {
                    kind: FetchKind::Gems,
                    message: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send gems result: receiver dropped");
        }
    });
}
