//! OpenAI session implementation

use crate::openai::error::{OpenAiError, Result};
use crate::openai::gateway::OpenAiSettings;
use crate::openai::protocol::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use bggovai_application::ports::llm_gateway::{GatewayError, LlmSession};
use bggovai_domain::Model;
use std::sync::Arc;
use tracing::debug;

/// One system prompt bound to one model.
pub struct OpenAiSession {
    client: reqwest::Client,
    settings: Arc<OpenAiSettings>,
    api_key: String,
    model: Model,
    system_prompt: String,
}

impl OpenAiSession {
    pub(crate) fn new(
        client: reqwest::Client,
        settings: Arc<OpenAiSettings>,
        api_key: String,
        model: Model,
        system_prompt: String,
    ) -> Self {
        Self {
            client,
            settings,
            api_key,
            model,
            system_prompt,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    async fn complete(&self, content: &str) -> Result<String> {
        let url = self.settings.completions_url();
        let request = ChatRequest::new(
            self.model.as_str(),
            &self.system_prompt,
            content,
            self.settings.temperature,
        );

        debug!("POST {} (model: {})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::Decode(e.to_string()))?;

        Ok(body.into_text())
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        self.complete(content).await.map_err(GatewayError::from)
    }
}
