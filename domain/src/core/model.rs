//! Model value object representing the chat model

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chat models known to the advisor (Value Object)
///
/// Any other identifier is carried verbatim as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Model {
    #[default]
    Gpt41Mini,
    Gpt41,
    Gpt41Nano,
    Gpt4o,
    Gpt4oMini,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt41Nano => "gpt-4.1-nano",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Custom(s) => s,
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s {
            "" => return Err(DomainError::InvalidModel("model name cannot be empty".into())),
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4.1-nano" => Model::Gpt41Nano,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gpt41Mini);
        assert_eq!(Model::default().to_string(), "gpt-4.1-mini");
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "my-finetune-v2".parse().unwrap();
        assert_eq!(model, Model::Custom("my-finetune-v2".to_string()));
        assert_eq!(model.to_string(), "my-finetune-v2");
    }

    #[test]
    fn test_known_model_parses() {
        let model: Model = " gpt-4o ".parse().unwrap();
        assert_eq!(model, Model::Gpt4o);
    }

    #[test]
    fn test_empty_model_rejected() {
        assert!("".parse::<Model>().is_err());
        assert!("  ".parse::<Model>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Model::Gpt41).unwrap();
        assert_eq!(json, "\"gpt-4.1\"");
        let parsed: Model = serde_json::from_str("\"gpt-4.1-mini\"").unwrap();
        assert_eq!(parsed, Model::Gpt41Mini);
    }
}
