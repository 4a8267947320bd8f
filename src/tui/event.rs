use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    // Global actions (passed to core::update)
    Quit,
    SwitchPage,
    Randomize,
    ClearSelection,
    Favorite,
    Unfavorite,
    Refresh,

    // Focus-routed events (handled by whichever component has focus)
    Submit,
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Escape,
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    FocusFavorites, // Ctrl+O jumps to the favorites pane

    // Terminal housekeeping
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                    (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Randomize),
                    (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::ClearSelection),
                    (KeyModifiers::CONTROL, KeyCode::Char('f')) => Some(TuiEvent::Favorite),
                    (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(TuiEvent::Unfavorite),
                    (KeyModifiers::CONTROL, KeyCode::Char('o')) => Some(TuiEvent::FocusFavorites),
                    (_, KeyCode::Tab) => Some(TuiEvent::SwitchPage),
                    (_, KeyCode::F(5)) => Some(TuiEvent::Refresh),
                    // Regular key handling
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
