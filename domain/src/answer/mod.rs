//! Answer domain
//!
//! What comes back from one submitted question:
//!
//! - [`outcome::AnswerOutcome`]: the backend result, with failures already
//!   turned into user-facing text
//! - [`reply::AssistantReply`]: the reply split into summary and details
//! - [`turn::AdvisorTurn`]: everything the presentation layer renders

pub mod outcome;
pub mod reply;
pub mod turn;

pub use outcome::AnswerOutcome;
pub use reply::AssistantReply;
pub use turn::{AdvisorTurn, TurnDebug};
