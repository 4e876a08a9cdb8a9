//! Answer cache port
//!
//! Identical requests within the expiry window are answered from the cache
//! instead of calling the backend again. Purely an optimization: a cache
//! that never hits is always correct.

/// Everything that determines a backend answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub system_prompt: String,
    pub context: String,
    pub model: String,
}

impl CacheKey {
    pub fn new(
        system_prompt: impl Into<String>,
        context: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            context: context.into(),
            model: model.into(),
        }
    }
}

/// Port for storing successful answers.
///
/// Implementations handle expiry themselves; `get` must never return an
/// expired answer.
pub trait AnswerCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<String>;

    fn put(&self, key: CacheKey, answer: String);
}

/// Cache that stores nothing.
pub struct NoAnswerCache;

impl AnswerCache for NoAnswerCache {
    fn get(&self, _key: &CacheKey) -> Option<String> {
        None
    }

    fn put(&self, _key: CacheKey, _answer: String) {}
}
