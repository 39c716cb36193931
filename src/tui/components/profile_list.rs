//! # ProfileList Component
//!
//! Renders the visible slice of the profile list, one row per profile.
//!
//! The scroll window is owned by `Selector`; this component only draws the
//! rows `visible_range()` names, so what is on screen always matches the
//! state the invariants are checked against.
//!
//! ```text
//!   default
//! > dev (role_arn: arn:aws:iam::123456789012:role/dev)
//!   prod
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::Selector;
use crate::tui::component::Component;

const CURSOR_MARKER: &str = "> ";
const BLANK_MARKER: &str = "  ";

pub const TOO_SMALL: &str = "Terminal window is too small.";

/// Stands in for the rows when the terminal leaves no room for any.
pub fn too_small_line() -> Line<'static> {
    Line::styled(TOO_SMALL, Style::default().add_modifier(Modifier::ITALIC))
}

pub struct ProfileList<'a> {
    state: &'a Selector,
}

impl<'a> ProfileList<'a> {
    pub fn new(state: &'a Selector) -> Self {
        Self { state }
    }

    fn row(&self, index: usize, width: usize) -> Line<'a> {
        let profile = &self.state.profiles()[index];
        let is_cursor = self.state.cursor() == Some(index);

        if !is_cursor {
            return Line::from(vec![
                Span::raw(BLANK_MARKER),
                Span::raw(profile.name.as_str()),
            ]);
        }

        let mut spans = vec![
            Span::styled(CURSOR_MARKER, Style::default().fg(Color::Indexed(208))),
            Span::styled(
                profile.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        ];

        if self.state.show_details()
            && let Some(role_arn) = profile.role_arn.as_deref()
        {
            let used = CURSOR_MARKER.width() + profile.name.width();
            let detail = format!(" (role_arn: {role_arn})");
            spans.push(Span::styled(
                truncate_to_width(&detail, width.saturating_sub(used)),
                Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
            ));
        }

        Line::from(spans)
    }
}

impl Component for ProfileList<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let width = usize::from(area.width);
        let lines: Vec<Line> = self
            .state
            .visible_range()
            .map(|index| self.row(index, width))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Cut `text` to at most `max_width` display cells, ending in "…" when
/// anything was removed.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
