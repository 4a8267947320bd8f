//! # GemList Component
//!
//! Scrollable card stack for restaurant search results. Each result renders
//! as a bordered card (name, rating, wrapped address) inside a scroll view,
//! so long addresses never push later cards off screen.
//!
//! Follows the persistent state + transient wrapper pattern: scroll position
//! lives in `GemListState` inside `TuiState`, while `GemList` is rebuilt each
//! frame with borrowed results.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Gem;
use crate::core::action::EMPTY_GEMS_TEXT;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Scroll state for the gem card stack.
pub struct GemListState {
    pub scroll_state: ScrollViewState,
    /// Last known viewport height, for clamping between frames.
    pub viewport_height: u16,
}

impl GemListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
        }
    }

    /// Reset the scroll position, used when a new search replaces the results.
    pub fn reset(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    fn clamp_scroll(&mut self, content_height: u16) {
        let max_y = content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl Default for GemListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Scrolling is handled on the state type so the wrapper can stay transient.
impl EventHandler for GemListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            _ => None,
        }
    }
}

/// One search result as a bordered card.
struct GemCard<'a> {
    gem: &'a Gem,
}

impl<'a> GemCard<'a> {
    /// Height of the card at the given width: borders, the rating line, and
    /// however many lines the wrapped address needs.
    fn calculate_height(gem: &Gem, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2).max(1);
        let address_lines = Paragraph::new(gem.address.as_str())
            .wrap(Wrap { trim: true })
            .line_count(inner_width) as u16;
        address_lines + 3
    }
}

impl<'a> Widget for GemCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", self.gem.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let [rating_area, address_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);

        Line::styled(
            format!("★ {:.1}", self.gem.rating),
            Style::default().fg(Color::Yellow),
        )
        .render(rating_area, buf);

        Paragraph::new(self.gem.address.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .render(address_area, buf);
    }
}

/// Transient render wrapper for the search results pane.
pub struct GemList<'a> {
    pub state: &'a mut GemListState,
    pub gems: Option<&'a [Gem]>,
    pub location: Option<&'a str>,
    pub is_fetching: bool,
}

impl<'a> GemList<'a> {
    pub fn new(
        state: &'a mut GemListState,
        gems: Option<&'a [Gem]>,
        location: Option<&'a str>,
        is_fetching: bool,
    ) -> Self {
        Self {
            state,
            gems,
            location,
            is_fetching,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.location {
            Some(location) => format!(" Hidden Gems in {location} "),
            None => " Hidden Gems ".to_string(),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dim = Style::default().fg(Color::DarkGray);

        if self.is_fetching {
            let searching = Paragraph::new("Searching for hidden gems...")
                .style(dim)
                .alignment(Alignment::Center);
            frame.render_widget(searching, inner);
            return;
        }

        let gems = match self.gems {
            Some(gems) => gems,
            None => {
                let hint =
                    Paragraph::new("Enter a location above and press Enter to hunt for hidden gems.")
                        .style(dim)
                        .wrap(Wrap { trim: true });
                frame.render_widget(hint, inner);
                return;
            }
        };

        if gems.is_empty() {
            let empty = Paragraph::new(EMPTY_GEMS_TEXT)
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true });
            frame.render_widget(empty, inner);
            return;
        }

        let content_width = inner.width.saturating_sub(1); // scrollbar safe area
        let heights: Vec<u16> = gems
            .iter()
            .map(|gem| GemCard::calculate_height(gem, content_width))
            .collect();
        let content_height: u16 = heights.iter().sum();

        self.state.viewport_height = inner.height;
        self.state.clamp_scroll(content_height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (gem, height) in gems.iter().zip(heights) {
            let card_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(GemCard { gem }, card_rect);
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
