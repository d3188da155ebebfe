//! Port definitions
//!
//! Interfaces implemented by the infrastructure layer ([`poll_api`],
//! [`load_target`], [`sample_sink`]) and the presentation layer
//! ([`load_progress`], [`ui_event`]).

pub mod load_progress;
pub mod load_target;
pub mod poll_api;
pub mod sample_sink;
pub mod ui_event;
