//! One answered submission

use crate::answer::{AnswerOutcome, AssistantReply};
use crate::core::model::Model;
use crate::routing::{Institution, Topic};
use serde::Serialize;

/// Technical details of a turn, shown on request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnDebug {
    pub topic: Topic,
    pub followup: Option<&'static str>,
    pub model: Model,
    pub sources_count: usize,
    pub cached: bool,
}

/// Everything produced for a single question.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorTurn {
    pub question: String,
    pub title: &'static str,
    pub topic: Topic,
    pub clarification: Option<&'static str>,
    pub institutions: Vec<&'static Institution>,
    pub outcome: AnswerOutcome,
    pub reply: AssistantReply,
    pub debug: TurnDebug,
}
