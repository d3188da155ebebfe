//! Polling domain
//!
//! Themes group polls; a poll is a question with positionally-ordered
//! options; results are aggregated counts per option label.
//!
//! ```text
//! ThemeCatalog ──► Theme ──► Poll ──► PollOption (index = vote choice)
//!                              │
//!                              └──► PollResults (label → count)
//! ```

pub mod entities;
pub mod ordered_map;
pub mod results;

pub use entities::{
    NewPoll, Poll, PollId, PollOption, Theme, ThemeCatalog, ThemeKey, option_letter,
};
pub use results::{PollResults, ResultRow, ResultsBreakdown};
