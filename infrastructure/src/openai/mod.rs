//! OpenAI chat-completions adapter
//!
//! Implements the [`LlmGateway`](bggovai_application::LlmGateway) port over
//! `POST {base_url}/v1/chat/completions`. Each session carries one system
//! prompt and sends one user message per call; nothing is retried.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

pub use error::OpenAiError;
pub use gateway::{OpenAiLlmGateway, OpenAiSettings};
pub use session::OpenAiSession;
