//! Domain layer for votestream
//!
//! This crate contains the core entities and value objects of the polling
//! client. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Polls
//!
//! - **Theme**: a named category grouping related polls
//! - **Poll**: a question with an ordered list of options; the option
//!   position is the wire value of a vote
//! - **Results**: vote counts per option label
//!
//! ## Navigation
//!
//! The client moves between three views: `Themes → ThemePolls → Voting`,
//! with `back` stepping up one level.
//!
//! ## Load testing
//!
//! Scenarios of virtual users hammer the vote endpoint; thresholds on the
//! aggregated metrics decide pass/fail.

pub mod core;
pub mod load;
pub mod navigation;
pub mod notice;
pub mod poll;

// Re-export commonly used types
pub use core::{error::DomainError, string::sanitize};
pub use load::{
    Executor, LoadMetrics, LoadPlan, LoadReport, LoadScenario, ScenarioReport, Stage, Threshold,
    ThresholdOutcome, VoteProbe,
};
pub use navigation::{Navigation, View};
pub use notice::{Notice, NoticeLevel};
pub use poll::{
    NewPoll, Poll, PollId, PollOption, PollResults, ResultRow, ResultsBreakdown, Theme,
    ThemeCatalog, ThemeKey, option_letter,
};
