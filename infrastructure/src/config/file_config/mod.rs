//! Raw TOML configuration data types
//!
//! These structs mirror the config file. Every section is optional and
//! falls back to its defaults.

mod advisor;
mod cache;
mod logging;
mod output;
mod providers;
mod repl;

pub use advisor::FileAdvisorConfig;
pub use cache::FileCacheConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("advisor.model cannot be empty")]
    EmptyModelName,

    #[error("cache.ttl_seconds cannot be 0")]
    ZeroCacheTtl,

    #[error("cache.capacity cannot be 0")]
    ZeroCacheCapacity,

    #[error("providers.openai.temperature must be between 0 and 2, got {0}")]
    TemperatureOutOfRange(f32),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub advisor: FileAdvisorConfig,
    pub providers: FileProvidersConfig,
    pub cache: FileCacheConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.advisor.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.cache.ttl_seconds == 0 {
            return Err(ConfigValidationError::ZeroCacheTtl);
        }

        if self.cache.capacity == 0 {
            return Err(ConfigValidationError::ZeroCacheCapacity);
        }

        let temperature = self.providers.openai.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigValidationError::TemperatureOutOfRange(temperature));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bggovai_domain::{Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[advisor]
model = "gpt-4o"

[providers.openai]
api_key_env = "BG_OPENAI_KEY"
base_url = "https://proxy.example.bg"
temperature = 0.5

[cache]
enabled = false
ttl_seconds = 60
capacity = 16

[output]
format = "json"
color = false

[repl]
show_progress = false
show_sources = false
show_debug = true
history_limit = 5
transcript_limit = 10
history_file = "~/.local/share/bggovai/history.txt"

[logging]
conversation_log = "/tmp/bggovai.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.advisor.parse_model().unwrap(), Model::Gpt4o);
        assert_eq!(config.providers.openai.api_key_env, "BG_OPENAI_KEY");
        assert_eq!(config.providers.openai.base_url, "https://proxy.example.bg");
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.ttl_seconds, 60);
        assert_eq!(config.cache.capacity, 16);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(!config.repl.show_sources);
        assert!(config.repl.show_debug);
        assert_eq!(config.repl.history_limit, 5);
        assert_eq!(config.repl.transcript_limit, 10);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("/tmp/bggovai.jsonl")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();

        assert!(!config.output.color);
        assert_eq!(config.advisor.model, "gpt-4.1-mini");
        assert!(config.cache.enabled);
        assert_eq!(config.cache.ttl_seconds, 900);
        assert_eq!(config.providers.openai.api_key_env, "OPENAI_API_KEY");
        assert!(config.repl.show_sources);
        assert!(!config.repl.show_debug);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_model_name() {
        let config: FileConfig = toml::from_str("[advisor]\nmodel = \"  \"\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_cache_limits() {
        let config: FileConfig = toml::from_str("[cache]\nttl_seconds = 0\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroCacheTtl));

        let config: FileConfig = toml::from_str("[cache]\ncapacity = 0\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroCacheCapacity));
    }

    #[test]
    fn test_validate_temperature() {
        let config: FileConfig =
            toml::from_str("[providers.openai]\ntemperature = 2.5\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::TemperatureOutOfRange(2.5))
        );
    }
}
