//! # SearchBox Component
//!
//! Single-line text input with an optional suggestion dropdown. Used twice:
//! the country search on the home page (suggestions fed from the cache) and
//! the location input on the hidden-gems page (no suggestions).
//!
//! The buffer is internal state and persists across frames; `title`,
//! `focused`, and `suggestions` are props the TUI loop syncs before each
//! event/render pass. The dropdown paints over whatever sits below the
//! input, the same way overlays elsewhere use `Clear`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// User submitted the text (Enter pressed). Carries the effective text:
    /// the highlighted suggestion if one was picked, the raw buffer otherwise.
    Submit(String),
    /// Buffer or suggestion cursor changed
    Changed,
}

/// Text input with suggestion dropdown.
pub struct SearchBox {
    /// Text buffer (internal state). Kept after submit so the box shows the
    /// current selection, like a value-bound input.
    pub buffer: String,
    /// Box title (prop)
    pub title: &'static str,
    /// Whether this box currently receives input (prop)
    pub focused: bool,
    /// Suggestion rows to offer (prop, synced each frame; empty = no dropdown)
    pub suggestions: Vec<String>,
    selected_suggestion: Option<usize>,
}

impl SearchBox {
    pub fn new(title: &'static str) -> Self {
        Self {
            buffer: String::new(),
            title,
            focused: false,
            suggestions: Vec::new(),
            selected_suggestion: None,
        }
    }

    /// Height of the input box itself (the dropdown overlays below it).
    pub const HEIGHT: u16 = 3;

    fn render_dropdown(&self, frame: &mut Frame, area: Rect) {
        if !self.focused || self.suggestions.is_empty() {
            return;
        }

        let below = frame.area().height.saturating_sub(area.y + area.height);
        let height = (self.suggestions.len() as u16 + 2).min(below);
        if height < 3 {
            return;
        }

        let dropdown = Rect {
            x: area.x,
            y: area.y + area.height,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, dropdown);

        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect();
        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        let mut list_state = ListState::default().with_selected(self.selected_suggestion);
        frame.render_stateful_widget(list, dropdown, &mut list_state);
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(self.title);

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        if self.focused {
            let text_width = self.buffer.as_str().width() as u16;
            let cursor_x = (area.x + 1 + text_width).min(area.x + area.width.saturating_sub(2));
            frame.set_cursor_position((cursor_x, area.y + 1));
        }

        self.render_dropdown(frame, area);
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                self.selected_suggestion = None;
                Some(SearchEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                self.buffer
                    .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
                self.selected_suggestion = None;
                Some(SearchEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.buffer.pop().is_some() {
                    self.selected_suggestion = None;
                    Some(SearchEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorDown => {
                if self.suggestions.is_empty() {
                    return None;
                }
                let next = match self.selected_suggestion {
                    Some(i) => (i + 1).min(self.suggestions.len() - 1),
                    None => 0,
                };
                self.selected_suggestion = Some(next);
                Some(SearchEvent::Changed)
            }
            TuiEvent::CursorUp => match self.selected_suggestion {
                Some(0) => {
                    // Back out of the dropdown into the input line.
                    self.selected_suggestion = None;
                    Some(SearchEvent::Changed)
                }
                Some(i) => {
                    self.selected_suggestion = Some(i - 1);
                    Some(SearchEvent::Changed)
                }
                None => None,
            },
            TuiEvent::Escape => {
                if self.selected_suggestion.is_some() {
                    self.selected_suggestion = None;
                    Some(SearchEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Submit => {
                if let Some(i) = self.selected_suggestion
                    && let Some(pick) = self.suggestions.get(i)
                {
                    self.buffer = pick.clone();
                }
                self.selected_suggestion = None;
                Some(SearchEvent::Submit(self.buffer.clone()))
            }
            _ => None,
        }
    }
}
