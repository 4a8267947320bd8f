//! # CountryInfo Component
//!
//! Detail pane under the map. Renders the fact rows for the selected
//! country, plus a live local-time row derived from its first timezone.

use chrono::{FixedOffset, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::api::{CountryDetail, NOT_AVAILABLE};
use crate::tui::component::Component;

pub struct CountryInfo<'a> {
    pub detail: Option<&'a CountryDetail>,
    pub selected: Option<&'a str>,
    pub is_fetching: bool,
}

impl<'a> CountryInfo<'a> {
    pub fn new(
        detail: Option<&'a CountryDetail>,
        selected: Option<&'a str>,
        is_fetching: bool,
    ) -> Self {
        Self {
            detail,
            selected,
            is_fetching,
        }
    }
}

impl<'a> Component for CountryInfo<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.selected {
            Some(name) => format!(" Information about {name} "),
            None => " Country Information ".to_string(),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title);

        let dim = Style::default().fg(Color::DarkGray);

        let lines: Vec<Line> = if self.selected.is_none() {
            vec![Line::styled(
                "Search for a country, or press Ctrl+R to land somewhere random.",
                dim,
            )]
        } else if self.is_fetching || self.detail.is_none() {
            vec![Line::styled("Fetching country details...", dim)]
        } else {
            let detail = self.detail.unwrap();
            let label_style = Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD);
            let mut rows = detail.rows();
            rows.push((
                "Local Time",
                local_time_for(&detail.timezones).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ));
            rows.into_iter()
                .map(|(label, value)| {
                    let value_style = if value == NOT_AVAILABLE {
                        dim
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Line::from(vec![
                        Span::styled(format!("{label}: "), label_style),
                        Span::styled(value, value_style),
                    ])
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Current wall-clock time for the first timezone, formatted "HH:MM".
fn local_time_for(timezones: &[String]) -> Option<String> {
    let offset = utc_offset_secs(timezones.first()?)?;
    let tz = FixedOffset::east_opt(offset)?;
    Some(Utc::now().with_timezone(&tz).format("%H:%M").to_string())
}

/// Parse a "UTC", "UTC+05:45", or "UTC-03:00" style timezone label into an
/// offset in seconds.
fn utc_offset_secs(tz: &str) -> Option<i32> {
    let rest = tz.strip_prefix("UTC")?;
    if rest.is_empty() {
        return Some(0);
    }
    let sign = match rest.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let (hours, minutes) = rest[1..].split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    Some(sign * (hours * 3600 + minutes * 60))
}
