//! Infrastructure layer for bggovai
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod cache;
pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use cache::TtlAnswerCache;
pub use config::{
    ConfigLoader, ConfigValidationError, FileAdvisorConfig, FileCacheConfig, FileConfig,
    FileLoggingConfig, FileOpenAiConfig, FileOutputConfig, FileOutputFormat, FileReplConfig,
};
pub use logging::JsonlConversationLogger;
pub use openai::{OpenAiError, OpenAiLlmGateway, OpenAiSession, OpenAiSettings};
