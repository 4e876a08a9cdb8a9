//! Reply splitting

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Placeholder summary for a blank reply.
pub const NO_ANSWER: &str = "(няма отговор)";

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("static pattern"));

/// A reply split into a short summary and the remaining details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub summary: String,
    pub details: String,
}

impl AssistantReply {
    /// Split on the first blank line: the first paragraph is the summary.
    pub fn split(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self {
                summary: NO_ANSWER.to_string(),
                details: String::new(),
            };
        }

        let mut parts = PARAGRAPH_BREAK.splitn(text, 2);
        let summary = parts.next().unwrap_or_default().to_string();
        let details = parts.next().unwrap_or_default().to_string();
        Self { summary, details }
    }

    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_reply() {
        let reply = AssistantReply::split("  \n ");
        assert_eq!(reply.summary, NO_ANSWER);
        assert!(!reply.has_details());
    }

    #[test]
    fn test_single_paragraph() {
        let reply = AssistantReply::split("Подайте заявление онлайн.\nТакса: 10 лв.");
        assert_eq!(reply.summary, "Подайте заявление онлайн.\nТакса: 10 лв.");
        assert_eq!(reply.details, "");
    }

    #[test]
    fn test_splits_on_first_blank_line_only() {
        let reply = AssistantReply::split("Резюме\n  \nСтъпки\n\nДокументи");
        assert_eq!(reply.summary, "Резюме");
        assert_eq!(reply.details, "Стъпки\n\nДокументи");
        assert!(reply.has_details());
    }
}
