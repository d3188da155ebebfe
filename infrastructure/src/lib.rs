//! Infrastructure layer for votestream
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the reqwest-backed poll API and load target, the seeded
//! demo catalog, configuration file loading and the JSONL sample sink.

pub mod config;
pub mod demo;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigSource, ConfigValidationError, FileApiConfig, FileClientConfig,
    FileConfig, FileLoadConfig,
};
pub use demo::{demo_results, demo_themes, seeded_demo_store};
pub use http::{HttpLoadTarget, HttpPollApi, HttpSetupError};
pub use logging::JsonlSampleSink;
