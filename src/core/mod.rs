//! # Core Application Logic
//!
//! The profile picker's business logic. It knows nothing about any specific
//! UI technology.
//!
//! ```text
//!   ProfileSource ──► Selector::new ──► update(state, action) ──► Report
//!    (source.rs)       (state.rs)         (action.rs)             (report.rs)
//!                                              ▲
//!                                              │ Action
//!                                       ┌──────┴──────┐
//!                                       │     TUI     │
//!                                       │   Adapter   │
//!                                       │ (ratatui)   │
//!                                       └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Selector` struct: cursor, scroll window and layout
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`source`]: Where profiles come from (`~/.aws/config`)
//! - [`report`]: Turning the final outcome into shell output and an exit code
//! - [`config`]: Settings with defaults → file → env → CLI precedence

pub mod action;
pub mod config;
pub mod report;
pub mod source;
pub mod state;
