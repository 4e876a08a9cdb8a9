//! Progress notification port
//!
//! Brackets the only blocking step of a submission, the backend call.

/// Callback for progress updates while a question is answered
///
/// Implementations live in the presentation layer (spinner, plain text).
pub trait AdvisorProgress: Send + Sync {
    /// Called right before the backend is asked
    fn on_answer_start(&self, model: &str);

    /// Called when the answer (or its failure text) is ready
    fn on_answer_complete(&self, success: bool);

    /// Called when the answer came from the cache instead of the backend
    fn on_cache_hit(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AdvisorProgress for NoProgress {
    fn on_answer_start(&self, _model: &str) {}
    fn on_answer_complete(&self, _success: bool) {}
}
