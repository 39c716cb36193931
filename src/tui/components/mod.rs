//! # TUI Components
//!
//! Stateless components that project a `Selector` onto the screen. Each one
//! receives its data as props and never mutates selection state.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Title + separator, HEADER_ROWS tall)
//! ├── profile_list.rs  (Visible slice of profiles)
//! ├── status_bar.rs    (Separator, help, position; FOOTER_ROWS tall)
//! └── notice.rs        (Initializing / error / empty screens)
//! ```

pub mod notice;
pub mod profile_list;
pub mod status_bar;
pub mod title_bar;

pub use notice::Notice;
pub use profile_list::ProfileList;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
