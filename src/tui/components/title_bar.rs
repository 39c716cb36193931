//! # TitleBar Component
//!
//! The two header rows above the profile list: a bold title and a dim
//! horizontal rule spanning the terminal width.
//!
//! Stateless: it receives the width as a prop and renders what it's given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const TITLE: &str = "Select an AWS profile";

pub struct TitleBar {
    /// Width of the separator rule, in cells.
    pub width: u16,
}

impl TitleBar {
    pub fn new(width: u16) -> Self {
        Self { width }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let title = Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ));
        vec![title, rule(self.width)]
    }
}

/// A dim horizontal rule `width` cells wide.
pub fn rule(width: u16) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(usize::from(width)),
        Style::default().add_modifier(Modifier::DIM),
    ))
}

impl Component for TitleBar {
    fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
