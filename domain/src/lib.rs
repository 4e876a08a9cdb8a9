//! Domain layer for bggovai
//!
//! This crate contains the routing rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! A submitted question is mapped, by four independent keyword tables, to:
//!
//! - a [`Topic`] (classifier)
//! - an optional follow-up question (clarification selector)
//! - an ordered subset of the institution [`DIRECTORY`] (router)
//! - a short title for the session history (summarizer)
//!
//! ## Session
//!
//! [`AdvisorSession`] holds the history and transcript of one interactive
//! session and is passed explicitly to whoever handles a submission.

pub mod answer;
pub mod config;
pub mod core;
pub mod prompt;
pub mod routing;
pub mod session;

// Re-export commonly used types
pub use answer::{AdvisorTurn, AnswerOutcome, AssistantReply, TurnDebug};
pub use config::{DisplayOptions, OutputFormat};
pub use core::{error::DomainError, model::Model, question::Question, string::truncate};
pub use prompt::PromptTemplate;
pub use routing::{
    DIRECTORY, Institution, Topic, classify, make_title, needs_clarification, route,
};
pub use session::entities::{
    AdvisorSession, HISTORY_DISPLAY_LIMIT, HistoryEntry, Message, Role, TRANSCRIPT_DISPLAY_LIMIT,
};
