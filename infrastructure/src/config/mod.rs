//! Configuration file loading for bggovai
//!
//! Sources are merged with figment, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `OPENAI_MODEL` environment variable (`advisor.model`)
//! 3. Global: `$XDG_CONFIG_HOME/bggovai/config.toml` (or `~/.config/bggovai/config.toml`)
//! 4. Project: `./bggovai.toml` or `./.bggovai.toml`
//! 5. `--config <path>`
//! 6. `BGGOVAI_*` environment variables (`__` separates sections)
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAdvisorConfig, FileCacheConfig, FileConfig, FileLoggingConfig,
    FileOpenAiConfig, FileOutputConfig, FileOutputFormat, FileProvidersConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
