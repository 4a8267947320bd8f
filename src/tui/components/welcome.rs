//! # Welcome Page Component
//!
//! Full-screen greeting shown on startup until dismissed with Enter.
//! There is no way back to it afterwards.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct WelcomePage {
    /// 0.0..=1.0 pulse driving the prompt line brightness.
    pub pulse_value: f32,
}

impl WelcomePage {
    pub fn new(pulse_value: f32) -> Self {
        Self { pulse_value }
    }
}

impl Component for WelcomePage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prompt_color = if self.pulse_value > 0.5 {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let lines = vec![
            Line::from(Span::styled(
                "Welcome to Treasure Hunter...",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Double Click to Embark on Your Next Adventure...",
                Style::default().fg(Color::Cyan),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Allons-y!  [Enter]",
                Style::default().fg(prompt_color).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("trove v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let height = lines.len() as u16;
        let [center] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}
