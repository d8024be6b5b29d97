use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen that draws itself into a `Rect`.
///
/// Props are struct fields; `render` takes `&mut self` so stateful
/// components can refresh caches (scroll offsets, layout) while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns low-level `TuiEvent`s into its own events.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
