use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields) borrowed from the
/// `Selector` and render into a `Frame` within a given `Rect`. They never
/// mutate selection state; rendering is a pure projection.
pub trait Component {
    /// Render the component into the given area.
    fn render(&self, frame: &mut Frame, area: Rect);
}
