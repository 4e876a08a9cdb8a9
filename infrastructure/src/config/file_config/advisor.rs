//! Advisor configuration from TOML (`[advisor]` section)

use bggovai_domain::{DomainError, Model};
use serde::{Deserialize, Serialize};

/// Raw advisor configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAdvisorConfig {
    /// Chat model name, e.g. "gpt-4.1-mini"
    pub model: String,
}

impl Default for FileAdvisorConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
        }
    }
}

impl FileAdvisorConfig {
    pub fn parse_model(&self) -> Result<Model, DomainError> {
        self.model.parse()
    }
}
