//! Configuration file loading for magi-arbiter
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment variables `MAGI_<SECTION>__<KEY>` (e.g. `MAGI_ENDPOINT__BASE_URL`)
//! 3. Project root: `./magi.toml` or `./.magi.toml`
//! 4. Global: `$XDG_CONFIG_HOME/magi-arbiter/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEndpointConfig, FileModelsConfig, FileOutputConfig,
    FilePromptsConfig,
};
pub use loader::ConfigLoader;
