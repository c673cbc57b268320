use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,

    // Sidebar navigation (routed to core actions)
    CursorUp,
    CursorDown,
    /// Digit key: jump straight to a page by 0-based position.
    JumpTo(usize),

    // Content pane scrolling (handled by the page view)
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,

    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    return None;
                }
                log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
                match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                    (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Char(c @ '1'..='9')) => {
                        Some(TuiEvent::JumpTo(c as usize - '1' as usize))
                    }
                    (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                    (_, KeyCode::PageDown) | (_, KeyCode::Char(' ')) => {
                        Some(TuiEvent::ScrollPageDown)
                    }
                    (_, KeyCode::Home) => Some(TuiEvent::ScrollToTop),
                    (_, KeyCode::End) => Some(TuiEvent::ScrollToBottom),
                    _ => None,
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}
