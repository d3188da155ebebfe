//! Configuration file loading for votestream
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `VOTESTREAM_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./votestream.toml` or `./.votestream.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/votestream/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileApiConfig, FileClientConfig, FileConfig, FileConstantLoadConfig,
    FileLoadConfig, FileRampUpConfig,
};
pub use loader::{ConfigLoader, ConfigSource, ENV_PREFIX};
