//! Backend answer outcome

use serde::{Deserialize, Serialize};

/// Shown when no API credential is configured.
pub const INACTIVE_MESSAGE: &str = "⚠️ AI модулът не е активен (липсва OPENAI_API_KEY). Мога да дам ориентир и без ИИ, но без „умно“ персонализиране.";

/// Result of asking the language model.
///
/// Every branch renders as text; none of them is an error for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum AnswerOutcome {
    /// The model replied (possibly with an empty string)
    Answered(String),
    /// No credential configured
    Inactive,
    /// The call failed; carries the reason
    Failed(String),
}

impl AnswerOutcome {
    /// The text shown to the user for this outcome.
    pub fn text(&self) -> String {
        match self {
            AnswerOutcome::Answered(answer) => answer.trim().to_string(),
            AnswerOutcome::Inactive => INACTIVE_MESSAGE.to_string(),
            AnswerOutcome::Failed(reason) => {
                format!("❌ AI повикването не мина. Причина: {}", reason)
            }
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, AnswerOutcome::Answered(_))
    }
}
