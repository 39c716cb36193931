use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;

use crate::core::state::{FOOTER_ROWS, HEADER_ROWS, Selector};
use crate::tui::component::Component;
use crate::tui::components::profile_list::too_small_line;
use crate::tui::components::{Notice, ProfileList, StatusBar, TitleBar};

/// Which full-screen notice, if any, replaces the list.
pub(crate) fn notice_for(state: &Selector) -> Option<Notice> {
    if let Some(reason) = state.load_error() {
        Some(Notice::LoadError(reason.to_string()))
    } else if !state.is_ready() {
        Some(Notice::Initializing)
    } else if state.is_empty() {
        Some(Notice::NoProfiles)
    } else {
        None
    }
}

/// Render the whole screen. Reads the state, never changes it.
pub fn draw_ui(frame: &mut Frame, state: &Selector) {
    if let Some(notice) = notice_for(state) {
        let area = frame.area();
        notice.render(frame, area);
        return;
    }
    if state.viewport_height() == 0 {
        draw_too_small(frame, state);
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(HEADER_ROWS), Min(0), Length(FOOTER_ROWS)]);
    let [title_area, list_area, status_area] = layout.areas(frame.area());

    TitleBar::new(state.terminal_width()).render(frame, title_area);
    ProfileList::new(state).render(frame, list_area);
    status_bar(state).render(frame, status_area);
}

fn status_bar(state: &Selector) -> StatusBar {
    StatusBar::new(
        state.terminal_width(),
        state.cursor().unwrap_or(0),
        state.profiles().len(),
    )
}

/// Header, a one-line message and footer, stacked. When they don't all fit
/// the top rows scroll off so the footer stays on screen.
fn draw_too_small(frame: &mut Frame, state: &Selector) {
    let mut lines = TitleBar::new(state.terminal_width()).lines();
    lines.push(too_small_line());
    lines.extend(status_bar(state).lines());

    let area = frame.area();
    let hidden = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(area.height);
    frame.render_widget(Paragraph::new(lines).scroll((hidden, 0)), area);
}
