//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use crossterm::event::Event;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::state::{Profile, Selector};
use crate::tui::EventSource;

/// Profiles with the given names and no role ARNs.
pub fn profiles(names: &[&str]) -> Vec<Profile> {
    names.iter().map(|name| Profile::new(*name)).collect()
}

/// A selector that has already received its first size report (width 80).
pub fn ready_selector(names: &[&str], preferred: Option<&str>, height: u16) -> Selector {
    let mut state = Selector::new(profiles(names), preferred);
    state.resize(80, height);
    state
}

/// Renders the state into a `TestBackend` and returns each row as a string.
pub fn render_lines(state: &Selector, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| crate::tui::ui::draw_ui(f, state))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Replays a fixed list of crossterm events, then reports end of input.
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
