//! TUI (Text User Interface) module for votestream
//!
//! Interactive Themes → ThemePolls → Voting browser built on ratatui, with a
//! create-poll overlay. The
//! [`PollController`](votestream_application::PollController) runs as a
//! background actor; this module only turns key presses into commands and
//! renders the events that come back.

mod app;
mod form;
mod keys;
mod state;
mod widgets;

pub use app::TuiApp;
pub use form::CreateForm;
pub use keys::{FormAction, KeyAction, map_form_key, map_key};
pub use state::TuiState;
