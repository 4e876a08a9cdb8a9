//! Ask Advisor use case
//!
//! Handles one submitted question end to end:
//!
//! 1. Record the question in the session history and transcript
//! 2. Classify the topic, pick a follow-up, route to institutions
//! 3. Assemble the context and ask the backend (or the answer cache)
//! 4. Convert the backend result into an [`AnswerOutcome`]
//! 5. Record the reply and return the [`AdvisorTurn`]
//!
//! Backend faults end here. [`execute`](AskAdvisorUseCase::execute) has no
//! error type: a missing credential and a failed call both become text.

use crate::config::BehaviorConfig;
use crate::ports::answer_cache::{AnswerCache, CacheKey, NoAnswerCache};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{AdvisorProgress, NoProgress};
use bggovai_domain::{
    AdvisorSession, AdvisorTurn, AnswerOutcome, AssistantReply, Model, PromptTemplate, Question,
    TurnDebug, classify, needs_clarification, route, truncate,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the [`AskAdvisorUseCase`].
#[derive(Debug, Clone)]
pub struct AskAdvisorInput {
    /// The submitted question.
    pub question: Question,
}

impl AskAdvisorInput {
    pub fn new(question: impl Into<Question>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Use case for answering a citizen's question.
pub struct AskAdvisorUseCase {
    gateway: Arc<dyn LlmGateway>,
    cache: Arc<dyn AnswerCache>,
    conversation_logger: Arc<dyn ConversationLogger>,
    config: BehaviorConfig,
}

impl AskAdvisorUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, config: BehaviorConfig) -> Self {
        Self {
            gateway,
            cache: Arc::new(NoAnswerCache),
            conversation_logger: Arc::new(NoConversationLogger),
            config,
        }
    }

    /// Create with an answer cache.
    pub fn with_cache(mut self, cache: Arc<dyn AnswerCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Whether the backend can be called at all.
    pub fn is_ai_active(&self) -> bool {
        self.gateway.has_credential()
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, session: &mut AdvisorSession, input: AskAdvisorInput) -> AdvisorTurn {
        self.execute_with_progress(session, input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        session: &mut AdvisorSession,
        input: AskAdvisorInput,
        progress: &dyn AdvisorProgress,
    ) -> AdvisorTurn {
        let question = input.question.content();
        info!("Question submitted: {}", truncate(question, 100));

        let title = session.record_question(question).title;

        let topic = classify(question);
        let clarification = needs_clarification(question, topic);
        let institutions = route(question);

        debug!(
            topic = %topic,
            followup = clarification.is_some(),
            sources = institutions.len(),
            "Question routed"
        );

        self.conversation_logger.log(ConversationEvent::new(
            "question_submitted",
            serde_json::json!({
                "question": question,
                "title": title,
                "topic": topic.code(),
                "followup": clarification,
                "sources": institutions.iter().map(|i| i.name).collect::<Vec<_>>(),
            }),
        ));

        let context = PromptTemplate::context(question, topic, clarification, &institutions);
        let (outcome, cached) = self.answer(&context, progress).await;

        let text = outcome.text();
        session.record_answer(text.clone());
        let reply = AssistantReply::split(&text);

        let debug = TurnDebug {
            topic,
            followup: clarification,
            model: self.config.model.clone(),
            sources_count: institutions.len(),
            cached,
        };
        session.set_last_debug(debug.clone());

        self.conversation_logger.log(ConversationEvent::new(
            "assistant_reply",
            serde_json::json!({
                "model": self.config.model.to_string(),
                "outcome": &outcome,
                "cached": cached,
                "bytes": text.len(),
                "text": text,
            }),
        ));

        AdvisorTurn {
            question: question.to_string(),
            title,
            topic,
            clarification,
            institutions,
            outcome,
            reply,
            debug,
        }
    }

    /// Ask the backend, consulting the cache first.
    ///
    /// Returns the outcome and whether it came from the cache. Only real
    /// answers are cached, so a credential added later takes effect at once.
    async fn answer(&self, context: &str, progress: &dyn AdvisorProgress) -> (AnswerOutcome, bool) {
        let system = PromptTemplate::system();
        let model = &self.config.model;
        let key = CacheKey::new(system, context, model.as_str());

        if self.config.use_cache
            && let Some(answer) = self.cache.get(&key)
        {
            debug!("Answer served from cache");
            progress.on_cache_hit();
            return (AnswerOutcome::Answered(answer), true);
        }

        progress.on_answer_start(model.as_str());

        let outcome = match self.query(model, system, context).await {
            Ok(answer) => {
                info!("Model {} answered ({} bytes)", model, answer.len());
                AnswerOutcome::Answered(answer)
            }
            Err(GatewayError::MissingCredential) => {
                info!("No API credential configured; AI module inactive");
                AnswerOutcome::Inactive
            }
            Err(e) => {
                warn!("Backend call failed: {}", e);
                AnswerOutcome::Failed(e.to_string())
            }
        };

        progress.on_answer_complete(outcome.is_answered());

        if self.config.use_cache
            && let AnswerOutcome::Answered(answer) = &outcome
        {
            self.cache.put(key, answer.clone());
        }

        (outcome, false)
    }

    async fn query(&self, model: &Model, system: &str, context: &str) -> Result<String, GatewayError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(model, system)
            .await?;
        session.send(context).await
    }
}
