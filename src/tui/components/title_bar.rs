//! # TitleBar Component
//!
//! Top bar showing the app name, the active page, a spinner while any fetch
//! is in flight, and the current status banner.
//!
//! TitleBar is purely presentational - it receives all data as props and has
//! no internal state. The banner text and level come straight from the core
//! `App`; the bar just picks a color per level:
//!
//! - Info → cyan, Success → green, Warning → yellow, Error → red

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::style::{Color, Modifier, Style};

use crate::core::state::{Notice, NoticeLevel, Page};
use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top status bar component.
pub struct TitleBar {
    pub page: Page,
    pub notice: Option<Notice>,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(page: Page, notice: Option<Notice>, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            page,
            notice,
            is_loading,
            spinner_frame,
        }
    }
}

fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::Cyan,
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Treasure Hunter",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" | {}", self.page.label()),
                Style::default().fg(Color::Gray),
            ),
        ];

        if self.is_loading {
            let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            spans.push(Span::styled(
                format!(" {glyph}"),
                Style::default().fg(Color::Cyan),
            ));
        }

        if let Some(notice) = &self.notice {
            spans.push(Span::styled(
                format!(" | {}", notice.text),
                Style::default().fg(notice_color(notice.level)),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_page() {
        let mut title_bar = TitleBar::new(Page::HiddenGems, None, false, 0);
        let text = render_to_text(&mut title_bar);

        assert!(text.contains("Treasure Hunter"));
        assert!(text.contains("Hidden Gems"));
    }

    #[test]
    fn test_title_bar_shows_notice_text() {
        let mut title_bar = TitleBar::new(
            Page::Home,
            Some(Notice::success("Added Nepal to favorites!")),
            false,
            0,
        );
        let text = render_to_text(&mut title_bar);

        assert!(text.contains("Added Nepal to favorites!"));
    }

    #[test]
    fn test_title_bar_spinner_only_while_loading() {
        let mut loading = TitleBar::new(Page::Home, None, true, 0);
        assert!(render_to_text(&mut loading).contains(SPINNER_FRAMES[0]));

        let mut idle = TitleBar::new(Page::Home, None, false, 0);
        assert!(!render_to_text(&mut idle).contains(SPINNER_FRAMES[0]));
    }

    #[test]
    fn test_notice_colors_follow_level() {
        assert_eq!(notice_color(NoticeLevel::Info), Color::Cyan);
        assert_eq!(notice_color(NoticeLevel::Success), Color::Green);
        assert_eq!(notice_color(NoticeLevel::Warning), Color::Yellow);
        assert_eq!(notice_color(NoticeLevel::Error), Color::Red);
    }
}
