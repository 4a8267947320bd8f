//! # Favorites Component
//!
//! Sidebar listing the favorited countries. Focused with Ctrl+O, dismissed
//! with Esc. Enter opens the highlighted country, `d` removes it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FavoritesState` lives in `TuiState` and holds only the cursor; the
//!   names themselves stay in the session and are borrowed in each frame
//! - `Favorites` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::event::TuiEvent;

/// Persistent cursor state for the favorites sidebar.
pub struct FavoritesState {
    pub selected: usize,
    pub list_state: ListState,
}

impl FavoritesState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Handle a key event against the current favorites list, returning a
    /// FavoriteEvent if the sidebar should act.
    pub fn handle_event(&mut self, event: &TuiEvent, favorites: &[String]) -> Option<FavoriteEvent> {
        match event {
            TuiEvent::Escape => Some(FavoriteEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !favorites.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !favorites.is_empty() {
                    self.selected = (self.selected + 1).min(favorites.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => favorites
                .get(self.selected)
                .map(|name| FavoriteEvent::Open(name.clone())),
            TuiEvent::InputChar('d') => favorites
                .get(self.selected)
                .map(|name| FavoriteEvent::Remove(name.clone())),
            _ => None,
        }
    }

    /// Clamp the cursor after the list changed length (add or remove).
    pub fn sync(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

impl Default for FavoritesState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the favorites sidebar.
pub enum FavoriteEvent {
    Open(String),
    Remove(String),
    Dismiss,
}

/// Transient render wrapper for the favorites sidebar.
pub struct Favorites<'a> {
    state: &'a mut FavoritesState,
    favorites: &'a [String],
    focused: bool,
}

impl<'a> Favorites<'a> {
    pub fn new(state: &'a mut FavoritesState, favorites: &'a [String], focused: bool) -> Self {
        Self {
            state,
            favorites,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(" My Favorites ")
            .padding(Padding::horizontal(1));
        if self.focused {
            block = block.title_bottom(Line::from(" Enter Open  d Remove  Esc Back ").centered());
        }

        if self.favorites.is_empty() {
            let empty = Paragraph::new("No favorite countries yet. Add some!")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let name_width = inner_width.saturating_sub(2); // heart + gap

        let items: Vec<ListItem> = self
            .favorites
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if self.focused && i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let line = Line::from(vec![
                    Span::styled("♥ ", Style::default().fg(Color::LightMagenta)),
                    Span::styled(truncate_to_width(name, name_width), style),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..."
/// if needed. Width-aware so multi-byte names never split mid-character.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}
