use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data via struct fields and draw themselves into
/// a `Rect`. Persistent presentation state (list cursors, scroll offsets)
/// lives in a `*State` struct owned by the TUI loop; the component borrows
/// it mutably for the duration of the render.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so the component can update cursors, offsets, or
    /// cached layout during the pass.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
