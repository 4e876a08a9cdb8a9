//! Session domain.
//!
//! - [`entities::AdvisorSession`]: per-session history and transcript
//! - [`entities::Message`]: a single turn of the transcript
//! - [`entities::HistoryEntry`]: a titled question in the history list

pub mod entities;
