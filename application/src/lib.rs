//! Application layer for votestream
//!
//! This crate contains use cases, port definitions, the demo-mode fallback
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod fallback;
pub mod ports;
pub mod use_cases;
pub mod voting;

// Re-export commonly used types
pub use config::ClientBehavior;
pub use fallback::{DataOrigin, DemoStore, PollSource, Sourced, ThemePolls, VoteOutcome};
pub use ports::{
    load_progress::{LoadProgressNotifier, NoLoadProgress},
    load_target::LoadTarget,
    poll_api::{ApiError, PollApi},
    sample_sink::{NoSampleSink, SampleSink, VoteSample},
    ui_event::{UiEvent, ViewModel},
};
pub use use_cases::poll_controller::{
    CommandAction, ControllerCommand, PollController, VoteCompletion,
};
pub use use_cases::results_poller::ResultsPoller;
pub use use_cases::run_load_test::{RunLoadTestError, RunLoadTestUseCase};
pub use voting::{Debouncer, VoteGuard, VoteRejection};
