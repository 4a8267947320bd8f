//! # MapView Component
//!
//! Braille-canvas world map. Every cached country is a dot, favorites get
//! their own tint, and the selection is marked and labelled. Selecting a
//! country narrows the viewport to a window around it; clearing the
//! selection zooms back out to the whole world.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, BorderType};

use crate::api::Country;
use crate::tui::component::Component;

/// Half-spans of the zoomed viewport, in degrees. Roughly 2:1 to match the
/// aspect of terminal cells.
const ZOOM_HALF_LON: f64 = 30.0;
const ZOOM_HALF_LAT: f64 = 15.0;

/// Computes the canvas bounds: the whole world, or a window centered on the
/// selected country.
fn view_bounds(selected: Option<&Country>) -> ([f64; 2], [f64; 2]) {
    match selected {
        Some(c) => (
            [c.longitude - ZOOM_HALF_LON, c.longitude + ZOOM_HALF_LON],
            [c.latitude - ZOOM_HALF_LAT, c.latitude + ZOOM_HALF_LAT],
        ),
        None => ([-180.0, 180.0], [-90.0, 90.0]),
    }
}

pub struct MapView<'a> {
    pub countries: &'a [Country],
    pub favorites: &'a [String],
    pub selected: Option<&'a Country>,
}

impl<'a> MapView<'a> {
    pub fn new(
        countries: &'a [Country],
        favorites: &'a [String],
        selected: Option<&'a Country>,
    ) -> Self {
        Self {
            countries,
            favorites,
            selected,
        }
    }
}

impl<'a> Component for MapView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.selected {
            Some(c) => format!(" Selected Country: {} ", c.name),
            None => " World Map ".to_string(),
        };

        let (x_bounds, y_bounds) = view_bounds(self.selected);

        let dots: Vec<(f64, f64)> = self
            .countries
            .iter()
            .map(|c| (c.longitude, c.latitude))
            .collect();
        let favorite_dots: Vec<(f64, f64)> = self
            .countries
            .iter()
            .filter(|c| self.favorites.iter().any(|f| f == &c.name))
            .map(|c| (c.longitude, c.latitude))
            .collect();

        let canvas = Canvas::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(title),
            )
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    color: Color::Gray,
                    resolution: MapResolution::High,
                });
                ctx.draw(&Points {
                    coords: &dots,
                    color: Color::DarkGray,
                });
                ctx.draw(&Points {
                    coords: &favorite_dots,
                    color: Color::LightMagenta,
                });
                if let Some(c) = self.selected {
                    ctx.print(
                        c.longitude,
                        c.latitude,
                        Line::styled(
                            format!("◉ {}", c.name),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }
}
