use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// Somewhere terminal events come from.
pub trait EventSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> io::Result<Event>;
}

/// The real terminal, read through crossterm.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Map a terminal event to the action it stands for, if any.
pub fn translate(event: &Event) -> Option<Action> {
    match event {
        Event::Resize(width, height) => Some(Action::Resize {
            width: *width,
            height: *height,
        }),
        Event::Key(key_event) => translate_key(key_event),
        _ => None,
    }
}

fn translate_key(key_event: &KeyEvent) -> Option<Action> {
    // Release and repeat events would double every keystroke on some platforms
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        // Raw mode turns Ctrl+C into a plain key press
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Cancel),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(Action::Cancel),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(Action::MoveUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(Action::MoveDown),
        (_, KeyCode::Char('v')) => Some(Action::ToggleDetails),
        (_, KeyCode::Enter) => Some(Action::Confirm),
        _ => None,
    }
}
