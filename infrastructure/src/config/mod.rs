//! Configuration file loading for req-clarifier
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `CLARIFIER_*` (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./clarifier.toml` or `./.clarifier.toml`
//! 4. Global: `~/.config/req-clarifier/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_MODEL, FileClarificationConfig, FileConfig, FileInputConfig, FileLoggingConfig,
    FileModelsConfig, FileOpenAiConfig, FileOutputConfig, FilePipelineConfig, FileProvidersConfig,
};
pub use loader::ConfigLoader;
