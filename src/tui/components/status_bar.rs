//! # StatusBar Component
//!
//! The three footer rows below the profile list: separator rule, key help,
//! and the `Profile i/N` position indicator.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::title_bar::rule;

pub const HELP_TEXT: &str = "↑/k: up  ↓/j: down  Enter: select  v: toggle role ARN  q/Ctrl+C: quit";

pub struct StatusBar {
    pub width: u16,
    /// Zero-based cursor position.
    pub position: usize,
    pub total: usize,
}

impl StatusBar {
    pub fn new(width: u16, position: usize, total: usize) -> Self {
        Self {
            width,
            position,
            total,
        }
    }

    pub fn status_text(&self) -> String {
        format!("Profile {}/{}", self.position + 1, self.total)
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let dim = Style::default().add_modifier(Modifier::DIM);
        vec![
            rule(self.width),
            Line::from(Span::styled(HELP_TEXT, dim)),
            Line::from(Span::styled(self.status_text(), dim)),
        ]
    }
}

impl Component for StatusBar {
    fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
