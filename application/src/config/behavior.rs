//! Use case behavior settings.

use bggovai_domain::Model;

/// Application behavior configuration.
///
/// Controls which model the advisor asks and whether identical requests are
/// served from the answer cache.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Model identifier sent with every request.
    pub model: Model,
    /// Look up and store answers in the [`AnswerCache`](crate::AnswerCache).
    pub use_cache: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            use_cache: true,
        }
    }
}

impl BehaviorConfig {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BehaviorConfig::default();
        assert_eq!(config.model, Model::Gpt41Mini);
        assert!(config.use_cache);
    }

    #[test]
    fn test_builders() {
        let config = BehaviorConfig::default()
            .with_model(Model::Gpt4o)
            .without_cache();
        assert_eq!(config.model, Model::Gpt4o);
        assert!(!config.use_cache);
    }
}
