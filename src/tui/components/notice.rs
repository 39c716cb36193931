//! # Notice Component
//!
//! Full-screen message shown instead of the list: while waiting for the
//! first size report, when loading failed, and when there is nothing to pick.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Initializing,
    LoadError(String),
    NoProfiles,
}

impl Notice {
    fn lines(&self) -> Vec<Line<'_>> {
        match self {
            Notice::Initializing => vec![Line::raw("Initializing, please wait...")],
            Notice::LoadError(reason) => vec![
                Line::raw(""),
                Line::styled(
                    format!("Initialization error: {reason}"),
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::raw(" Press q or Ctrl+C to quit."),
            ],
            Notice::NoProfiles => vec![
                Line::raw(""),
                Line::styled(
                    "No AWS profiles found.",
                    Style::default().fg(Color::LightYellow),
                ),
                Line::raw(""),
                Line::raw(" Press q, Ctrl+C or Enter to quit."),
            ],
        }
    }
}

impl Component for Notice {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines()).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
