//! # Selector State
//!
//! The bounded-viewport selection state: which profile is highlighted, which
//! slice of the list is on screen, and how tall that slice can be.
//!
//! ```text
//! Selector
//! ├── profiles: Vec<Profile>     // fixed for the session
//! ├── cursor: usize              // highlighted index (meaningless when empty)
//! ├── scroll_offset: usize       // first visible index
//! ├── viewport_height: usize     // rows available for the list
//! ├── terminal_width: u16        // for the presenter only
//! ├── ready: bool                // first size report seen
//! ├── show_details: bool         // role_arn display toggle
//! ├── load_error: Option<String> // source failed
//! └── outcome: Outcome           // how the session ended
//! ```
//!
//! Once `ready` is set and the list is non-empty, every transition leaves
//! the state satisfying:
//!
//! 1. `cursor < profiles.len()`
//! 2. `scroll_offset <= profiles.len().saturating_sub(viewport_height)`
//! 3. with `viewport_height > 0`: `scroll_offset <= cursor < scroll_offset + viewport_height`
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::ops::Range;

use crate::core::source::SourceError;

/// Rows above the list: title and separator.
pub const HEADER_ROWS: u16 = 2;
/// Rows below the list: separator, help text and status line.
pub const FOOTER_ROWS: u16 = 3;

/// A selectable AWS CLI profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role_arn: Option<String>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role_arn: None,
        }
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }
}

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    /// Index into the profile list.
    Selected(usize),
    Cancelled,
    /// Confirmed with nothing to select.
    EmptyCancelled,
    InitError(String),
}

impl Outcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }
}

#[derive(Debug, Clone)]
pub struct Selector {
    profiles: Vec<Profile>,
    cursor: usize,
    scroll_offset: usize,
    viewport_height: usize,
    terminal_width: u16,
    ready: bool,
    show_details: bool,
    load_error: Option<String>,
    outcome: Outcome,
}

impl Selector {
    /// Build the initial state. The cursor starts on the first profile named
    /// `preferred`, or on the first profile when there is no match.
    pub fn new(profiles: Vec<Profile>, preferred: Option<&str>) -> Self {
        let cursor = preferred
            .filter(|name| !name.is_empty())
            .and_then(|name| profiles.iter().position(|p| p.name == name))
            .unwrap_or(0);

        Self {
            profiles,
            cursor,
            scroll_offset: 0,
            viewport_height: 0,
            terminal_width: 0,
            ready: false,
            show_details: false,
            load_error: None,
            outcome: Outcome::Pending,
        }
    }

    /// A session whose profile list could not be loaded. Only cancel is
    /// accepted, and it ends in `Outcome::InitError`.
    pub fn failed(reason: impl Into<String>) -> Self {
        let mut state = Self::new(Vec::new(), None);
        state.load_error = Some(reason.into());
        state
    }

    pub fn from_source(loaded: Result<Vec<Profile>, SourceError>, preferred: Option<&str>) -> Self {
        match loaded {
            Ok(profiles) => Self::new(profiles, preferred),
            Err(e) => Self::failed(e.to_string()),
        }
    }

    pub fn with_details(mut self, show_details: bool) -> Self {
        self.show_details = show_details;
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Highlighted index; `None` when there is nothing to highlight.
    pub fn cursor(&self) -> Option<usize> {
        (!self.profiles.is_empty()).then_some(self.cursor)
    }

    pub fn selected_profile(&self) -> Option<&Profile> {
        self.cursor().and_then(|i| self.profiles.get(i))
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn terminal_width(&self) -> u16 {
        self.terminal_width
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn show_details(&self) -> bool {
        self.show_details
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Indices of the profiles currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.scroll_offset + self.viewport_height).min(self.profiles.len());
        self.scroll_offset.min(end)..end
    }

    fn max_scroll_offset(&self) -> usize {
        self.profiles.len().saturating_sub(self.viewport_height)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Reconcile cursor and scroll window with a terminal size report.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        let previous_height = self.viewport_height;
        self.viewport_height = usize::from(height.saturating_sub(HEADER_ROWS + FOOTER_ROWS));

        let first_report = !self.ready;
        self.ready = true;

        let len = self.profiles.len();
        if len == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
            return;
        }

        let height = self.viewport_height;
        if first_report {
            // Bring the preferred profile into view at the bottom edge
            self.scroll_offset = if height > 0 && self.cursor >= height {
                self.cursor - height + 1
            } else {
                0
            };
        } else if height != previous_height {
            // A scrolled window that showed the last profile stays on the
            // tail, unless that would push the cursor off the top
            let tail_offset = len.saturating_sub(height);
            let showed_tail = previous_height > 0
                && self.scroll_offset > 0
                && self.scroll_offset + previous_height >= len
                && self.cursor >= tail_offset;
            if showed_tail || self.scroll_offset + height > len {
                self.scroll_offset = len.saturating_sub(height);
            }
        }

        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        if height > 0 {
            self.cursor = self
                .cursor
                .clamp(self.scroll_offset, self.scroll_offset + height - 1);
        }
        self.cursor = self.cursor.min(len - 1);
    }

    /// Returns `true` if the cursor moved.
    pub fn move_down(&mut self) -> bool {
        if self.cursor + 1 >= self.profiles.len() {
            return false;
        }
        self.cursor += 1;
        if self.viewport_height > 0 && self.cursor >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = self.cursor + 1 - self.viewport_height;
        }
        true
    }

    /// Returns `true` if the cursor moved.
    pub fn move_up(&mut self) -> bool {
        if self.profiles.is_empty() || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        true
    }

    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
    }

    pub fn confirm(&mut self) {
        self.outcome = if self.profiles.is_empty() {
            Outcome::EmptyCancelled
        } else {
            Outcome::Selected(self.cursor)
        };
    }

    pub fn cancel(&mut self) {
        self.outcome = match &self.load_error {
            Some(reason) => Outcome::InitError(reason.clone()),
            None => Outcome::Cancelled,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{profiles, ready_selector};

    /// Terminal height giving `rows` list rows.
    fn height_for(rows: u16) -> u16 {
        rows + HEADER_ROWS + FOOTER_ROWS
    }

    #[test]
    fn test_new_starts_on_preferred_profile() {
        let state = Selector::new(profiles(&["default", "dev", "prod"]), Some("prod"));
        assert_eq!(state.cursor(), Some(2));
        assert_eq!(state.scroll_offset(), 0);
        assert!(!state.is_ready());
        assert_eq!(state.outcome(), &Outcome::Pending);
    }

    #[test]
    fn test_new_falls_back_to_first_profile() {
        let state = Selector::new(profiles(&["default", "dev"]), Some("staging"));
        assert_eq!(state.cursor(), Some(0));

        let state = Selector::new(profiles(&["default", "dev"]), Some(""));
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn test_new_picks_first_duplicate_name() {
        let state = Selector::new(profiles(&["a", "dup", "b", "dup"]), Some("dup"));
        assert_eq!(state.cursor(), Some(1));
    }

    #[test]
    fn test_empty_list_has_no_cursor() {
        let state = Selector::new(Vec::new(), Some("dev"));
        assert_eq!(state.cursor(), None);
        assert!(state.selected_profile().is_none());
    }

    #[test]
    fn test_from_source_error_keeps_reason() {
        let state = Selector::from_source(Err(SourceError::NoHomeDir), Some("dev"));
        assert!(state.is_empty());
        assert!(state.load_error().unwrap().contains("home directory"));
    }

    #[test]
    fn test_viewport_height_subtracts_chrome() {
        let state = ready_selector(&["a", "b"], None, 10);
        assert_eq!(state.viewport_height(), 5);
    }

    #[test]
    fn test_tiny_terminal_gives_zero_viewport() {
        let state = ready_selector(&["a", "b", "c"], Some("c"), 3);
        assert_eq!(state.viewport_height(), 0);
        assert_eq!(state.scroll_offset(), 0);
        assert_eq!(state.cursor(), Some(2));
        assert!(state.visible_range().is_empty());
    }

    #[test]
    fn test_first_report_scrolls_preferred_into_view() {
        let names: Vec<String> = (0..20).map(|i| format!("p{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let state = ready_selector(&refs, Some("p12"), height_for(4));

        assert_eq!(state.cursor(), Some(12));
        assert_eq!(state.scroll_offset(), 9);
        assert_eq!(state.visible_range(), 9..13);
    }

    #[test]
    fn test_first_report_keeps_offset_zero_when_cursor_fits() {
        let state = ready_selector(&["a", "b", "c", "d"], Some("c"), height_for(3));
        assert_eq!(state.scroll_offset(), 0);
        assert_eq!(state.cursor(), Some(2));
    }

    #[test]
    fn test_resize_shrink_pulls_window_back_to_tail() {
        let names: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = ready_selector(&refs, Some("9"), height_for(5));
        assert_eq!(state.scroll_offset(), 5);
        assert_eq!(state.visible_range(), 5..10);

        state.resize(80, height_for(3));
        assert_eq!(state.viewport_height(), 3);
        assert_eq!(state.scroll_offset(), 7);
        assert_eq!(state.cursor(), Some(9));
    }

    #[test]
    fn test_resize_shrink_keeps_cursor_above_tail() {
        let names: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = ready_selector(&refs, Some("9"), height_for(5));
        for _ in 0..4 {
            state.move_up();
        }
        assert_eq!(state.scroll_offset(), 5);
        assert_eq!(state.cursor(), Some(5));

        state.resize(80, height_for(3));
        assert_eq!(state.scroll_offset(), 5);
        assert_eq!(state.cursor(), Some(5));
        assert_eq!(state.visible_range(), 5..8);
    }

    #[test]
    fn test_resize_grow_pulls_window_back() {
        let names: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = ready_selector(&refs, Some("9"), height_for(3));
        assert_eq!(state.scroll_offset(), 7);

        state.resize(80, height_for(6));
        assert_eq!(state.scroll_offset(), 4);
        assert_eq!(state.cursor(), Some(9));
    }

    #[test]
    fn test_resize_shrink_mid_list_keeps_offset_and_clamps_cursor() {
        let names: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = ready_selector(&refs, Some("9"), height_for(5));
        assert_eq!(state.scroll_offset(), 5);

        state.resize(80, height_for(2));
        assert_eq!(state.scroll_offset(), 5);
        assert_eq!(state.cursor(), Some(6));
    }

    #[test]
    fn test_resize_with_unchanged_height_only_updates_width() {
        let mut state = ready_selector(&["a", "b", "c"], None, 10);
        state.move_down();
        state.resize(120, 10);
        assert_eq!(state.terminal_width(), 120);
        assert_eq!(state.cursor(), Some(1));
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_recovers_from_zero_viewport() {
        let mut state = ready_selector(&["a", "b", "c", "d", "e", "f"], None, 2);
        for _ in 0..5 {
            state.move_down();
        }
        assert_eq!(state.cursor(), Some(5));
        assert_eq!(state.scroll_offset(), 0);

        state.resize(80, height_for(2));
        assert_eq!(state.scroll_offset(), 0);
        assert_eq!(state.cursor(), Some(1));
    }

    #[test]
    fn test_move_down_scrolls_at_bottom_edge() {
        let mut state = ready_selector(&["a", "b", "c", "d"], None, height_for(2));
        assert!(state.move_down());
        assert_eq!(state.scroll_offset(), 0);
        assert!(state.move_down());
        assert_eq!(state.cursor(), Some(2));
        assert_eq!(state.scroll_offset(), 1);
    }

    #[test]
    fn test_move_down_stops_at_last_profile() {
        let mut state = ready_selector(&["a", "b"], Some("b"), 10);
        assert!(!state.move_down());
        assert_eq!(state.cursor(), Some(1));
    }

    #[test]
    fn test_move_up_scrolls_at_top_edge() {
        let mut state = ready_selector(&["a", "b", "c", "d"], Some("d"), height_for(2));
        assert_eq!(state.scroll_offset(), 2);
        assert!(state.move_up());
        assert_eq!(state.scroll_offset(), 2);
        assert!(state.move_up());
        assert_eq!(state.cursor(), Some(1));
        assert_eq!(state.scroll_offset(), 1);
    }

    #[test]
    fn test_move_up_stops_at_first_profile() {
        let mut state = ready_selector(&["a", "b"], None, 10);
        assert!(!state.move_up());
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn test_moves_on_empty_list_are_noops() {
        let mut state = ready_selector(&[], None, 10);
        assert!(!state.move_down());
        assert!(!state.move_up());
        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn test_toggle_details_leaves_navigation_alone() {
        let mut state = ready_selector(&["a", "b"], Some("b"), 10);
        state.toggle_details();
        assert!(state.show_details());
        assert_eq!(state.cursor(), Some(1));
        state.toggle_details();
        assert!(!state.show_details());
    }

    #[test]
    fn test_confirm_selects_cursor() {
        let mut state = ready_selector(&["a", "b"], Some("b"), 10);
        state.confirm();
        assert_eq!(state.outcome(), &Outcome::Selected(1));
    }

    #[test]
    fn test_confirm_on_empty_list() {
        let mut state = ready_selector(&[], None, 10);
        state.confirm();
        assert_eq!(state.outcome(), &Outcome::EmptyCancelled);
    }

    #[test]
    fn test_cancel_after_load_error_reports_init_error() {
        let mut state = Selector::failed("boom");
        state.cancel();
        assert_eq!(state.outcome(), &Outcome::InitError("boom".to_string()));
    }

    #[test]
    fn test_visible_range_for_short_list() {
        let state = ready_selector(&["a", "b"], None, 20);
        assert_eq!(state.visible_range(), 0..2);
    }

    #[test]
    fn test_profile_builder() {
        let profile = Profile::new("dev").with_role_arn("arn:aws:iam::123:role/dev");
        assert_eq!(profile.name, "dev");
        assert_eq!(profile.role_arn.as_deref(), Some("arn:aws:iam::123:role/dev"));
    }
}
