//! HTTP adapters (reqwest)

mod endpoint;
mod load_target;
mod poll_api;

pub use endpoint::{endpoint, parse_base_url};
pub use load_target::HttpLoadTarget;
pub use poll_api::HttpPollApi;

use thiserror::Error;

/// Errors building an HTTP adapter
#[derive(Error, Debug)]
pub enum HttpSetupError {
    #[error("Invalid base URL {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}
