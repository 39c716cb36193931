//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders the `Selector`,
//! and translates crossterm events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Output Stream
//!
//! The picker draws on **stderr**. Stdout is reserved for the single line
//! the shell evaluates (`eval "$(awsprof)"`), so nothing else may reach it
//! while the UI is up.
//!
//! ## Event Loop
//!
//! Strictly one event at a time: read, translate, `update()`, redraw if the
//! state changed. Reading is the only point where the loop blocks; there are
//! no timers and no background work. The loop ends as soon as `update()`
//! returns `Effect::Quit`.

mod component;
mod components;
mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::{self, Stderr, stderr};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use crate::core::action::{Action, Effect, update};
use crate::core::state::Selector;

pub use event::{EventSource, TerminalEvents, translate};

/// Raw mode + alternate screen on stderr for as long as it lives.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(stderr(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        info!("Terminal modes enabled (raw, alternate screen on stderr)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stderr(), Show, LeaveAlternateScreen);
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to leave raw mode: {}", e);
        }
    }
}

/// Run an interactive session to completion and return the final state.
pub fn run(mut state: Selector) -> io::Result<Selector> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut terminal: Terminal<CrosstermBackend<Stderr>> =
        Terminal::new(CrosstermBackend::new(stderr()))?;

    // The first size report comes from a query, later ones from Resize events
    let (width, height) = crossterm::terminal::size()?;
    update(&mut state, Action::Resize { width, height });

    event_loop(&mut terminal, &mut state, &mut TerminalEvents)?;
    info!("Session ended with {:?}", state.outcome());
    Ok(state)
}

/// Feed events into `update()` and redraw until the outcome is decided.
pub fn event_loop<B, E>(
    terminal: &mut Terminal<B>,
    state: &mut Selector,
    events: &mut E,
) -> io::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    E: EventSource,
{
    draw(terminal, state)?;

    while state.outcome().is_pending() {
        let event = events.next_event()?;
        let Some(action) = translate(&event) else {
            debug!("Ignoring event: {:?}", event);
            continue;
        };

        match update(state, action) {
            Effect::None => {}
            Effect::Redraw => draw(terminal, state)?,
            Effect::Quit => break,
        }
    }

    Ok(())
}

fn draw<B>(terminal: &mut Terminal<B>, state: &Selector) -> io::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    terminal
        .draw(|f| ui::draw_ui(f, state))
        .map(|_| ())
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Outcome;
    use crate::test_support::{ScriptedEvents, profiles};
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(40, 10)).unwrap()
    }

    #[test]
    fn test_loop_selects_and_stops() {
        let mut terminal = test_terminal();
        let mut state = Selector::new(profiles(&["default", "dev", "prod"]), Some("dev"));
        let mut events = ScriptedEvents::new([
            Event::Resize(40, 10),
            key(KeyCode::Down),
            key(KeyCode::Down),
            key(KeyCode::Enter),
            // Never read: the loop stops at Enter
            key(KeyCode::Up),
        ]);

        event_loop(&mut terminal, &mut state, &mut events).unwrap();
        assert_eq!(state.outcome(), &Outcome::Selected(2));
    }

    #[test]
    fn test_loop_ignores_unknown_events() {
        let mut terminal = test_terminal();
        let mut state = Selector::new(profiles(&["a", "b"]), None);
        let mut events = ScriptedEvents::new([
            Event::Resize(40, 10),
            Event::FocusLost,
            key(KeyCode::Char('x')),
            key(KeyCode::Char('q')),
        ]);

        event_loop(&mut terminal, &mut state, &mut events).unwrap();
        assert_eq!(state.outcome(), &Outcome::Cancelled);
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn test_loop_draws_current_state() {
        let mut terminal = test_terminal();
        let mut state = Selector::new(profiles(&["a", "b"]), None);
        let mut events = ScriptedEvents::new([Event::Resize(40, 10), key(KeyCode::Down)]);

        // The script runs dry before any outcome is decided
        let err = event_loop(&mut terminal, &mut state, &mut events).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let buffer = terminal.backend().buffer();
        let row: String = (0..40u16).map(|x| buffer[(x, 3u16)].symbol()).collect();
        assert_eq!(row.trim_end(), "> b");
    }

    #[test]
    fn test_loop_after_load_error_waits_for_cancel() {
        let mut terminal = test_terminal();
        let mut state = Selector::failed("missing config");
        let mut events = ScriptedEvents::new([
            Event::Resize(40, 10),
            key(KeyCode::Enter),
            key(KeyCode::Down),
            key(KeyCode::Esc),
        ]);

        event_loop(&mut terminal, &mut state, &mut events).unwrap();
        assert_eq!(state.outcome(), &Outcome::InitError("missing config".to_string()));
    }
}
