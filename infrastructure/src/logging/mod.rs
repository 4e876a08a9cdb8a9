//! Conversation logging.
//!
//! Provides [`JsonlConversationLogger`], which appends question and reply
//! events to a JSONL file through the
//! [`ConversationLogger`](bggovai_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
