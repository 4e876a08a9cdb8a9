//! Session domain entities

use crate::answer::TurnDebug;
use crate::routing::make_title;
use serde::{Deserialize, Serialize};

/// Number of history entries shown by default.
pub const HISTORY_DISPLAY_LIMIT: usize = 8;

/// Number of transcript messages shown by default.
pub const TRANSCRIPT_DISPLAY_LIMIT: usize = 20;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A submitted question with its display title (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub title: &'static str,
    pub question: String,
}

/// State of one interactive session (Entity)
///
/// Created when the session starts and passed explicitly to every handler.
/// History and transcript only grow; [`clear`](Self::clear) ends the session.
#[derive(Debug, Clone, Default)]
pub struct AdvisorSession {
    history: Vec<HistoryEntry>,
    messages: Vec<Message>,
    last_debug: Option<TurnDebug>,
}

impl AdvisorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the question to the history and the transcript.
    pub fn record_question(&mut self, question: &str) -> &HistoryEntry {
        self.messages.push(Message::user(question));
        self.history.push(HistoryEntry {
            title: make_title(question),
            question: question.to_string(),
        });
        &self.history[self.history.len() - 1]
    }

    pub fn record_answer(&mut self, answer: impl Into<String>) {
        self.messages.push(Message::assistant(answer));
    }

    pub fn set_last_debug(&mut self, debug: TurnDebug) {
        self.last_debug = Some(debug);
    }

    pub fn last_debug(&self) -> Option<&TurnDebug> {
        self.last_debug.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent `limit` history entries, newest first.
    pub fn recent_history(&self, limit: usize) -> impl Iterator<Item = &HistoryEntry> {
        let start = self.history.len().saturating_sub(limit);
        self.history[start..].iter().rev()
    }

    /// The last `limit` messages in chronological order.
    pub fn recent_messages(&self, limit: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    /// Number of submitted questions.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// End the session: drop history, transcript and debug state.
    pub fn clear(&mut self) {
        self.history.clear();
        self.messages.clear();
        self.last_debug = None;
    }
}
