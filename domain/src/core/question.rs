//! Question value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question submitted by a citizen or business (Value Object)
///
/// Immutable once created. Routing works on any text, including the empty
/// string, but a submission always carries at least one visible character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Question cannot be empty");
        Self { content }
    }

    /// Try to create a new question, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl std::str::FromStr for Question {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s).ok_or_else(|| DomainError::InvalidQuestion("question is blank".into()))
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("Как да платя данък?");
        assert_eq!(q.content(), "Как да платя данък?");
    }

    #[test]
    #[should_panic]
    fn test_empty_question_panics() {
        Question::new("");
    }

    #[test]
    fn test_try_new_blank() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("  \n ").is_none());
        assert!(Question::try_new("Загубих книжката си").is_some());
    }

    #[test]
    fn test_parse_blank_is_error() {
        let err = "   ".parse::<Question>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }
}
