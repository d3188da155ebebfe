//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application and domain
//! types after validation.

mod api;
mod client;
mod load;

pub use api::FileApiConfig;
pub use client::FileClientConfig;
pub use load::{FileConstantLoadConfig, FileLoadConfig, FileRampUpConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{field} cannot be 0")]
    ZeroValue { field: &'static str },

    #[error("{field} cannot be empty")]
    EmptyValue { field: &'static str },

    #[error("load.poll_ids must list at least one poll")]
    EmptyPollIds,

    #[error("load.think_time_ms minimum {min} exceeds maximum {max}")]
    InvertedThinkTime { min: u64, max: u64 },

    #[error("unknown load scenario '{0}' (expected constant_load or ramp_up)")]
    UnknownScenario(String),

    #[error("invalid threshold expression '{0}'")]
    InvalidThreshold(String),

    #[error("invalid load settings: {0}")]
    InvalidLoad(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Polling backend
    pub api: FileApiConfig,
    /// Interactive client timers
    pub client: FileClientConfig,
    /// Load-test settings
    pub load: FileLoadConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let required = [
            ("api.timeout_seconds", self.api.timeout_seconds),
            ("client.results_poll_seconds", self.client.results_poll_seconds),
            ("client.toast_seconds", self.client.toast_seconds),
            ("load.timeout_seconds", self.load.timeout_seconds),
        ];
        for (field, value) in required {
            if value == 0 {
                return Err(ConfigValidationError::ZeroValue { field });
            }
        }

        for (field, value) in [
            ("api.base_url", &self.api.base_url),
            ("load.target", &self.load.target),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigValidationError::EmptyValue { field });
            }
        }

        self.load.to_plan().map(|_| ())
    }
}
