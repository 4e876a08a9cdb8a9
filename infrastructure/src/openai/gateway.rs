//! OpenAI LLM Gateway implementation

use crate::openai::session::OpenAiSession;
use async_trait::async_trait;
use bggovai_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use bggovai_domain::Model;
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Resolved connection settings.
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// `None` or blank means the AI module is inactive
    pub api_key: Option<String>,
    pub base_url: String,
    pub temperature: f32,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl OpenAiSettings {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The configured key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// LLM Gateway for the OpenAI chat-completions API
pub struct OpenAiLlmGateway {
    client: reqwest::Client,
    settings: Arc<OpenAiSettings>,
}

impl OpenAiLlmGateway {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    pub fn with_client(client: reqwest::Client, settings: OpenAiSettings) -> Self {
        if settings.api_key().is_some() {
            info!("OpenAiLlmGateway initialized ({})", settings.base_url);
        } else {
            info!("OpenAiLlmGateway initialized without an API key");
        }

        Self {
            client,
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &OpenAiSettings {
        &self.settings
    }
}

#[async_trait]
impl LlmGateway for OpenAiLlmGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let api_key = self
            .settings
            .api_key()
            .ok_or(GatewayError::MissingCredential)?
            .to_string();

        Ok(Box::new(OpenAiSession::new(
            self.client.clone(),
            Arc::clone(&self.settings),
            api_key,
            model.clone(),
            system_prompt.to_string(),
        )))
    }

    fn has_credential(&self) -> bool {
        self.settings.api_key().is_some()
    }
}
