//! # Actions
//!
//! Everything that can happen while picking a profile becomes an `Action`.
//! User presses Enter? That's `Action::Confirm`. Terminal resized? That's
//! `Action::Resize { width, height }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the event loop what to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! `update()` is total: every action is valid in every state. Actions that
//! make no sense right now (moving in an empty list, confirming a failed
//! load, anything after the session ended) are ignored.

use log::debug;

use crate::core::state::Selector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The terminal reported its size in character cells.
    Resize { width: u16, height: u16 },
    MoveUp,
    MoveDown,
    ToggleDetails,
    Confirm,
    /// Quit key or interrupt.
    Cancel,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed.
    None,
    Redraw,
    /// The outcome is decided; stop reading events.
    Quit,
}

pub fn update(state: &mut Selector, action: Action) -> Effect {
    if !state.outcome().is_pending() {
        return Effect::Quit;
    }

    debug!("Applying {:?}", action);

    if let Action::Resize { width, height } = action {
        state.resize(width, height);
        return Effect::Redraw;
    }

    // A failed load only shows its error until the user leaves
    if state.load_error().is_some() {
        return match action {
            Action::Cancel => {
                state.cancel();
                Effect::Quit
            }
            _ => Effect::None,
        };
    }

    match action {
        Action::Cancel => {
            state.cancel();
            Effect::Quit
        }
        Action::Confirm => {
            state.confirm();
            Effect::Quit
        }
        _ if state.is_empty() => Effect::None,
        Action::MoveUp => redraw_if(state.move_up()),
        Action::MoveDown => redraw_if(state.move_down()),
        Action::ToggleDetails => {
            state.toggle_details();
            Effect::Redraw
        }
        Action::Resize { .. } => Effect::None,
    }
}

fn redraw_if(changed: bool) -> Effect {
    if changed { Effect::Redraw } else { Effect::None }
}
