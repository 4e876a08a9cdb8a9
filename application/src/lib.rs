//! Application layer for bggovai
//!
//! This crate contains the use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    answer_cache::{AnswerCache, CacheKey, NoAnswerCache},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{AdvisorProgress, NoProgress},
};
pub use use_cases::ask_advisor::{AskAdvisorInput, AskAdvisorUseCase};
