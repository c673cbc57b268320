use ratatui::Frame;
use ratatui::layout::Rect;

/// A renderable UI piece.
///
/// Transient wrappers are built each frame around borrowed persistent
/// state; `render` takes `&mut self` so a component can update that state
/// (scroll offsets, list highlights) during the pass. This aligns with
/// ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A state type that consumes terminal events.
pub trait EventHandler {
    /// The type of high-level event this handler emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
