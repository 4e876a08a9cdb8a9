//! Error types for the OpenAI adapter

use bggovai_application::GatewayError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to the chat-completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("API key is not set")]
    MissingApiKey,

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<OpenAiError> for GatewayError {
    fn from(e: OpenAiError) -> Self {
        match e {
            OpenAiError::MissingApiKey => GatewayError::MissingCredential,
            OpenAiError::Transport(err) if err.is_connect() || err.is_timeout() => {
                GatewayError::ConnectionError(err.to_string())
            }
            OpenAiError::Transport(err) => GatewayError::RequestFailed(err.to_string()),
            e @ OpenAiError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            OpenAiError::Decode(msg) => GatewayError::InvalidResponse(msg),
        }
    }
}
