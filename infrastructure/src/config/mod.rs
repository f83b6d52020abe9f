//! Configuration file loading for number-facts
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `NUMBER_FACTS_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./number-facts.toml` or `./.number-facts.toml`
//! 4. Global: `~/.config/number-facts/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileMathToolsConfig, FileNumbersApiConfig,
    FileProvidersConfig, FileQueryConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
