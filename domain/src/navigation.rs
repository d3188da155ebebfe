//! View navigation state machine
//!
//! ```text
//!            open theme            open poll
//!   Themes ─────────────► ThemePolls ─────────► Voting
//!     ▲        back            │  ▲     back       │
//!     └────────────────────────┘  └────────────────┘
//! ```
//!
//! Initial state is [`View::Themes`]; there is no terminal state. Nothing
//! survives a restart.

use crate::poll::{PollId, ThemeKey};

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Themes,
    ThemePolls(ThemeKey),
    Voting(PollId),
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Themes => "themes",
            View::ThemePolls(_) => "polls",
            View::Voting(_) => "vote",
        }
    }

    pub fn is_voting(&self) -> bool {
        matches!(self, View::Voting(_))
    }
}

/// Current view plus the theme the user came through.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    current: View,
    current_theme: Option<ThemeKey>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &View {
        &self.current
    }

    pub fn current_theme(&self) -> Option<&ThemeKey> {
        self.current_theme.as_ref()
    }

    pub fn show_themes(&mut self) {
        self.current = View::Themes;
    }

    pub fn enter_theme(&mut self, key: ThemeKey) {
        self.current_theme = Some(key.clone());
        self.current = View::ThemePolls(key);
    }

    /// Open the voting view. The remembered theme is kept so `back`
    /// returns to the same poll list.
    pub fn enter_poll(&mut self, id: PollId) {
        self.current = View::Voting(id);
    }

    /// Where `back` leads from the current view, without moving.
    pub fn back_target(&self) -> View {
        match &self.current {
            View::Voting(_) => match &self.current_theme {
                Some(key) => View::ThemePolls(key.clone()),
                None => View::Themes,
            },
            View::ThemePolls(_) | View::Themes => View::Themes,
        }
    }

    /// Step back one level and return the new view.
    pub fn back(&mut self) -> &View {
        self.current = self.back_target();
        &self.current
    }

    pub fn is_voting_on(&self, id: PollId) -> bool {
        self.current == View::Voting(id)
    }

    pub fn is_viewing_theme(&self, key: &ThemeKey) -> bool {
        matches!(&self.current, View::ThemePolls(k) if k == key)
    }
}
