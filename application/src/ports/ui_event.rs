//! UI event types emitted by PollController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. The TUI receives them over an unbounded channel and
//! redraws; nothing here knows about terminals.

use crate::fallback::DataOrigin;
use votestream_domain::{Notice, Poll, PollId, PollResults, Theme};

/// Events emitted by PollController for presentation layer to render
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Navigation finished loading a view
    ViewChanged(ViewModel),
    /// Fresh results for a poll (on open, after a vote, or from the poller)
    ResultsUpdated {
        poll_id: PollId,
        results: PollResults,
        origin: DataOrigin,
    },
    /// A vote was counted; the option gets the voted marker
    VoteMarked { poll_id: PollId, choice: usize },
    /// Transient toast
    Notice(Notice),
    /// Controller stopped
    Exit,
}

/// Everything a view needs to render, loaded up front.
#[derive(Debug, Clone)]
pub enum ViewModel {
    Themes {
        themes: Vec<Theme>,
        origin: DataOrigin,
    },
    ThemePolls {
        theme: Theme,
        polls: Vec<Poll>,
        origin: DataOrigin,
    },
    Voting {
        poll: Poll,
        /// Theme the poll belongs to, when known
        theme: Option<Theme>,
        results: PollResults,
        /// Choice already counted for this poll in this session
        voted_choice: Option<usize>,
        origin: DataOrigin,
    },
}

impl ViewModel {
    pub fn origin(&self) -> DataOrigin {
        match self {
            ViewModel::Themes { origin, .. }
            | ViewModel::ThemePolls { origin, .. }
            | ViewModel::Voting { origin, .. } => *origin,
        }
    }
}
