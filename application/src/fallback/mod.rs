//! Demo-mode fallback
//!
//! The backend is optional: when a call fails, the client keeps working on
//! in-memory demo data. [`DemoStore`] holds that data and [`PollSource`]
//! wraps the [`PollApi`](crate::ports::poll_api::PollApi) with the fallback
//! branch.

pub mod demo_store;
pub mod poll_source;

pub use demo_store::DemoStore;
pub use poll_source::{DataOrigin, PollSource, Sourced, ThemePolls, VoteOutcome};

#[cfg(test)]
pub(crate) mod test_support;
